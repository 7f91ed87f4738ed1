use std::{ffi::OsString, io};

use crate::{
    config::Config,
    error::ScpError,
    resolve::{parse_invocation, resolve, Invocation, ResolverConfig},
    transfer::{DiagnosticEngine, TransferEngine},
};

/// Drive one invocation from tokens to a handed off request, writing user-facing output to `out`.
///
/// `init_logging` is called once the command line is known to describe a transfer.
pub fn run<I, T, L>(
    args: I,
    resolver_cfg: ResolverConfig,
    out: &mut dyn io::Write,
    init_logging: L,
) -> Result<(), ScpError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    L: FnOnce(&Config),
{
    let cfg = match parse_invocation(args)? {
        Invocation::Info(text) => {
            out.write_all(text.as_bytes())?;
            return Ok(());
        }
        Invocation::Completions(shell) => {
            Config::generate_completion_script(shell, out);
            return Ok(());
        }
        Invocation::Transfer(cfg) => *cfg,
    };
    init_logging(&cfg);
    log::trace!("{cfg:?}");

    let request = resolve(&cfg.transfer, resolver_cfg)?;
    // Only the diagnostic engine exists, nothing is copied over the network
    DiagnosticEngine::new(out).transfer(&request)
}
