//! # Folio
//!
//! A paging text viewer.
//!
//! Folio streams a file through a fixed-size read window, splits it into
//! words, packs the words into width-bounded lines and writes fixed-size
//! pages of lines under single-key control.
//!
//! ## Pipeline
//!
//! ```text
//! Read ─▶ Window ─▶ WordScanner ─▶ LineAssembler ─▶ Pager ─▶ Write
//!                                                     ▲
//!                                      Controller ────┘ (f / q)
//! ```
//!
//! - **Window**: fixed backing store, compacted and refilled as words are scanned
//! - **Words**: a word keeps its trailing space, tab or line feed; a word
//!   that does not fit the rest of a line is left unconsumed for the next one
//! - **Pages**: `PAGE_SIZE` lines, then a sentinel line once input runs out
//!
//! ## Example
//!
//! ```rust
//! use folio::{PageStatus, Pager, PagerConfig};
//! use std::io::Cursor;
//!
//! let text = Cursor::new(b"hello pager\n".to_vec());
//! let mut pager = Pager::new(text, Vec::new(), PagerConfig::default()).unwrap();
//!
//! assert_eq!(pager.render_page().unwrap(), PageStatus::EndOfInput);
//! assert_eq!(pager.into_writer(), b"hello pager\n=== EOF ===\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod cli;
pub mod config;
pub mod control;
pub mod error;
pub mod layout;
pub mod render;
pub mod terminal;

// Re-exports for convenience
pub use buffer::Window;
pub use config::{PagerConfig, LINE_WIDTH, PAGE_SIZE};
pub use control::{Command, Controller, KeyPress, KeySource, ScriptedKeys, TerminalKeys};
pub use error::{PagerError, Result};
pub use layout::{Line, LineAssembler, LineEnd, Scan, WordScanner};
pub use render::{PageStatus, Pager};
pub use terminal::{OutputBuffer, RawModeGuard};
