use std::{io, process::ExitCode};

use scp_demo::{
    config::Config,
    error::EXIT_FAILURE,
    resolve::ResolverConfig,
    run::run,
};

fn main() -> ExitCode {
    let mut logging_result = Ok(());
    let result = run(
        std::env::args_os(),
        ResolverConfig::default(),
        &mut io::stdout().lock(),
        |cfg: &Config| logging_result = cfg.init_logging(),
    );

    if let Err(e) = logging_result {
        eprintln!("Error: {e:?}");
        return ExitCode::from(EXIT_FAILURE);
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_usage() {
                eprint!("{e}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}
