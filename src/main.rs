mod browse;
mod config;
mod data;
mod error;
mod prompt;
mod session;
mod stats;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use config::{Cli, Config};
use prompt::Console;

fn main() -> ExitCode {
    env_logger::init();

    let config = Config::from(Cli::parse());
    log::debug!("data directory: {}", config.data_dir().display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    match session::run(&mut console, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            eprintln!("\nError: {err:#}");
            ExitCode::FAILURE
        }
    }
}
