//! Error types for the pager.
//!
//! Running out of input and words that do not fit on a line are not errors.
//! They are [`Scan`](crate::layout::Scan) and
//! [`PageStatus`](crate::render::PageStatus) outcomes. Everything here ends
//! the session.

use std::io;
use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PagerError>;

/// Every error the pager can produce.
#[derive(Debug, thiserror::Error)]
pub enum PagerError {
    /// The file to view could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Raw mode could not be entered, or a keystroke could not be read.
    #[error("terminal error: {0}")]
    Terminal(#[source] io::Error),

    /// Writing rendered output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Page dimensions or buffer capacity are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
