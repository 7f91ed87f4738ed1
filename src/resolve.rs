//! Turns command-line tokens into a validated [`TransferRequest`]
//!
//! Every call builds a fresh parser from the given tokens, no parse state outlives an invocation.
use std::ffi::OsString;

use clap::{error::ErrorKind, Parser};

use crate::{
    config::{Config, TransferArgs},
    error::ScpError,
    transfer::{TransferMode, TransferRequest},
};

/// Knobs of the resolver that depend on how it is embedded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Reject port 0. The stand-alone binary enforces this, test harnesses driving the resolver may not.
    pub enforce_port_nonzero: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            enforce_port_nonzero: true,
        }
    }
}

/// Outcome of scanning the command line
#[derive(Debug)]
#[allow(variant_size_differences)]
pub enum Invocation {
    /// `-?` or `--version` was given, the rendered text is all there is to do
    Info(String),
    /// `--completions <SHELL>` was given
    Completions(clap_complete::Shell),
    /// Options to validate with [`resolve`]
    Transfer(Box<Config>),
}

/// Scan `args` (including the binary name) into an [`Invocation`].
///
/// Unknown options and malformed values become [`ScpError::Usage`] holding the parser error and the usage text.
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, ScpError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Config::try_parse_from(args) {
        Ok(cfg) => match cfg.completions {
            Some(shell) => Ok(Invocation::Completions(shell)),
            None => Ok(Invocation::Transfer(Box::new(cfg))),
        },
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Ok(Invocation::Info(e.render().to_string()))
            }
            _ => Err(ScpError::Usage(format!("{}\n{}", e.render(), Config::usage()))),
        },
    }
}

/// Validate the transfer options and decompose both path specs.
///
/// Checks run in a fixed order and the first failing one is reported:
/// zero port (if enforced), source and sink together, missing source, missing destination.
pub fn resolve(args: &TransferArgs, cfg: ResolverConfig) -> Result<TransferRequest<'_>, ScpError> {
    // Runs ahead of the mode check, so a zero port is reported even when -f and -t are both given
    if cfg.enforce_port_nonzero && !args.allow_zero_port && args.port() == 0 {
        return Err(ScpError::InvalidPort);
    }

    let mode = match (args.is_source(), args.sink_target()) {
        (true, Some(_)) => return Err(ScpError::ConflictingMode),
        (true, None) => Some(TransferMode::Source),
        (false, Some(target)) => Some(TransferMode::Sink { target }),
        (false, None) => None,
    };
    match mode {
        Some(m) => log::debug!("Transfer mode: {m}"),
        None => log::debug!("No transfer mode given"),
    }

    let source = args.source().ok_or(ScpError::MissingSource)?;
    let destination = args.destination().ok_or(ScpError::MissingDestination)?;

    let request = TransferRequest::new(mode, args.port(), source, destination);
    log::trace!("{request:?}");
    Ok(request)
}
