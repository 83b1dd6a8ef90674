//! Controller: Single-keystroke command loop driving a [`Pager`].
//!
//! # State machine
//!
//! ```text
//!            start (renders first page)
//!                     │
//!                     ▼
//!   ┌──── f ───▶ Rendering ── page ended ──▶ Ended ◀── f (no-op)
//!   └────────────┘    │                        │
//!                     q                        q
//!                     ▼                        ▼
//!                   quit ◀─────────────────────┘
//! ```

use super::keys::{Command, KeySource};
use crate::error::{PagerError, Result};
use crate::render::{PageStatus, Pager};
use log::{debug, info};
use std::io::{Read, Write};

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// More pages may follow.
    Rendering,
    /// The input ended or failed; only quitting remains.
    Ended,
}

/// Summary of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Pages written, including the first one.
    pub pages: u64,
    /// State when the session ended.
    pub state: State,
    /// How the last page ended, if the input was exhausted or failed.
    pub finished: Option<PageStatus>,
}

/// Drives a pager from keystrokes.
#[derive(Debug)]
pub struct Controller<R, W, K> {
    pager: Pager<R, W>,
    keys: K,
}

impl<R: Read, W: Write, K: KeySource> Controller<R, W, K> {
    /// Create a controller. Nothing is rendered until [`run`](Self::run).
    pub const fn new(pager: Pager<R, W>, keys: K) -> Self {
        Self { pager, keys }
    }

    /// Get the current state.
    ///
    /// The pager latches the end of its input, so the state is read from it.
    pub const fn state(&self) -> State {
        if self.pager.finished().is_some() {
            State::Ended
        } else {
            State::Rendering
        }
    }

    /// Run the session until the user quits or the key source closes.
    ///
    /// The first page is rendered on entry, before any key is read.
    ///
    /// # Errors
    ///
    /// Returns an error if output cannot be written or a key cannot be read.
    pub fn run(&mut self) -> Result<SessionSummary> {
        info!("session started");
        self.pager.render_page()?;

        while let Some(key) = self.keys.next_key().map_err(PagerError::Terminal)? {
            match Command::from_key(key) {
                Some(Command::NextPage) => {
                    // No-op once ended: the pager returns its final status.
                    self.pager.render_page()?;
                }
                Some(Command::Quit) => {
                    debug!("quit requested");
                    break;
                }
                None => {}
            }
        }

        let summary = SessionSummary {
            pages: self.pager.pages_rendered(),
            state: self.state(),
            finished: self.pager.finished(),
        };
        info!("session ended after {} pages", summary.pages);
        Ok(summary)
    }

    /// Consume the controller and return the pager.
    pub fn into_pager(self) -> Pager<R, W> {
        self.pager
    }
}
