//! Folio: page through a text file from the terminal.

use clap::Parser;
use env_logger::{Builder, Env};
use folio::cli::{self, Cli};
use log::debug;
use std::process::ExitCode;

fn init_logger() {
    // RUST_LOG overrides; default keeps stderr quiet while paging.
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}

fn main() -> ExitCode {
    init_logger();

    // Usage errors exit here with clap's code 2.
    let args = Cli::parse();

    match cli::run(&args) {
        Ok(summary) => {
            debug!("{summary:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("{e:?}");
            eprintln!("folio: {e}");
            ExitCode::from(cli::exit_code(&e))
        }
    }
}
