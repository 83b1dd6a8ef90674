//! Raw mode guard: Scoped single-keystroke input mode.

use crossterm::terminal;
use log::{debug, warn};
use std::io;

/// Holds the terminal in raw mode until dropped.
///
/// Records whether raw mode was already on when acquired. On drop, it
/// restores that prior state, whichever path the session ends on.
#[derive(Debug)]
#[must_use = "raw mode is restored as soon as the guard is dropped"]
pub struct RawModeGuard {
    /// Whether raw mode must be switched off again on drop.
    restore: bool,
}

impl RawModeGuard {
    /// Enter raw mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal mode cannot be queried or changed.
    pub fn acquire() -> io::Result<Self> {
        let was_raw = terminal::is_raw_mode_enabled()?;
        if !was_raw {
            terminal::enable_raw_mode()?;
        }
        debug!("raw mode acquired (already raw: {was_raw})");
        Ok(Self { restore: !was_raw })
    }

    /// Restore the terminal now, reporting failure.
    pub fn release(mut self) -> io::Result<()> {
        self.restore_mode()
    }

    fn restore_mode(&mut self) -> io::Result<()> {
        if std::mem::take(&mut self.restore) {
            terminal::disable_raw_mode()?;
            debug!("raw mode released");
        }
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore_mode() {
            warn!("failed to restore terminal mode: {e}");
        }
    }
}
