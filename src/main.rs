use std::process::ExitCode;

use imgopt::{ErrorKind, Result};

fn main() -> ExitCode {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let path = std::env::args_os()
        .nth(1)
        .ok_or(ErrorKind::MissingArgument)?;
    imgopt::optimize(path)?;
    Ok(())
}
