use anyhow::{Context, Result};

use util::*;

pub mod transfer;
pub mod util;

pub use transfer::{TransferArgs, DEFAULT_SSH_PORT};

pub const BIN_NAME: &str = "scp-demo";

#[derive(Debug, Parser, Clone, PartialEq, Eq)]
#[command(name = BIN_NAME, version, styles = cli_styles())]
#[command(about = "SCP demonstration: resolves the source/sink mode and the file paths of a copy")]
#[command(help_template = HELP_TEMPLATE)]
#[command(disable_help_flag = true, args_override_self = true)]
pub struct Config {
    #[command(flatten)]
    pub transfer: TransferArgs,

    /// Display this help and exit
    #[arg(short('?'), long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,

    /// Pass many times for more log output
    ///
    /// By default, it'll report errors, warnings and info,
    /// `-v` enables debug messages, `-vv` for trace messages.
    #[arg(short, long, action = ArgAction::Count, default_value_t = 0)]
    pub verbose: u8,

    /// Silence all log output
    #[arg(short, long, action = ArgAction::SetTrue, conflicts_with("verbose"), env = "SCP_DEMO_QUIET")]
    pub quiet: bool,

    /// Generate completion scripts for the specified shell and exit
    #[arg(long, value_name("SHELL"))]
    pub completions: Option<Shell>,
}

impl Config {
    /// Set up `stderrlog` according to `--verbose`/`--quiet`, can only succeed once per process
    pub fn init_logging(&self) -> Result<()> {
        use stderrlog::LogLevelNum;
        let log_level: LogLevelNum = match self.verbose {
            0 => LogLevelNum::Info,
            1 => LogLevelNum::Debug,
            255 => LogLevelNum::Off,
            _ => LogLevelNum::Trace,
        };

        stderrlog::new()
            .verbosity(log_level)
            .quiet(self.quiet)
            .init()
            .context("Failed to initialize logging")?;

        Ok(())
    }

    /// Rendered usage text, as shown by `-?`
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }

    /// Writes a completion script for `shell` to `out`
    pub fn generate_completion_script(shell: Shell, out: &mut dyn std::io::Write) {
        clap_complete::generate(shell, &mut Self::command(), BIN_NAME, out);
    }
}
