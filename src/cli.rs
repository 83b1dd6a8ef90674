//! Command line entry point.

use crate::config::PagerConfig;
use crate::control::{Controller, SessionSummary, TerminalKeys};
use crate::error::{PagerError, Result};
use crate::render::Pager;
use crate::terminal::{NewlineMode, RawModeGuard};
use clap::Parser;
use crossterm::tty::IsTty;
use log::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Exit code for runtime failures (terminal, output).
pub const EXIT_FAILURE: u8 = 1;

/// Exit code clap uses for usage errors.
pub const EXIT_USAGE: u8 = 2;

/// Exit code when the file cannot be opened.
pub const EXIT_OPEN: u8 = 3;

/// View a text file one page at a time.
///
/// Keys: `f` next page, `q` quit.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, arg_required_else_help = true)]
pub struct Cli {
    /// File to view
    pub path: PathBuf,
}

/// Map an error to the process exit code.
pub const fn exit_code(err: &PagerError) -> u8 {
    match err {
        PagerError::Open { .. } => EXIT_OPEN,
        _ => EXIT_FAILURE,
    }
}

/// Open the file and page through it on stdout.
///
/// Raw mode is held only while the controller runs. It is restored before
/// this returns, including when an error is returned.
pub fn run(cli: &Cli) -> Result<SessionSummary> {
    let config = PagerConfig::default();

    let mut stdout = io::stdout();
    writeln!(stdout, "Opening file {}...", cli.path.display())?;
    stdout.flush()?;

    let file = File::open(&cli.path).map_err(|source| PagerError::Open {
        path: cli.path.clone(),
        source,
    })?;
    info!("opened {}", cli.path.display());

    // Raw mode turns off output post-processing, so a bare LF no longer
    // returns the cursor to column zero.
    let newlines = if stdout.is_tty() {
        NewlineMode::CrLf
    } else {
        NewlineMode::Verbatim
    };

    let guard = RawModeGuard::acquire().map_err(PagerError::Terminal)?;
    let pager = Pager::new(file, stdout.lock(), config)?.with_newlines(newlines);
    let summary = Controller::new(pager, TerminalKeys::new()).run()?;
    guard.release().map_err(PagerError::Terminal)?;

    Ok(summary)
}
