use clap::error::ErrorKind;
use fxconv::cli::{Invocation, ui};
use fxconv::core::log::init_logging;
use fxconv::Error;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let invocation = match Invocation::parse_from(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(Error::Argument(e))
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            return match e.print() {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
        Err(e) => {
            println!("{}", ui::render_error(&e));
            return ExitCode::FAILURE;
        }
    };

    init_logging(invocation.verbose);

    match fxconv::run(&invocation).await {
        Ok(conversion) => {
            if invocation.verbose {
                println!("{}", ui::render_rate(&conversion));
            }
            println!("{}", ui::render_conversion(&conversion));
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Conversion failed");
            println!("{}", ui::render_error(&e));
            ExitCode::FAILURE
        }
    }
}
