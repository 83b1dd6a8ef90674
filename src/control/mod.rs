//! Control module: Keystroke input and the command loop.
//!
//! - **Keys**: [`KeySource`] yields keystrokes; [`TerminalKeys`] reads them
//!   from crossterm, [`ScriptedKeys`] replays a fixed list
//! - **Controller**: Maps keystrokes to [`Command`]s and renders pages

mod controller;
mod keys;

pub use controller::{Controller, SessionSummary, State};
pub use keys::{Command, KeyCode, KeyModifiers, KeyPress, KeySource, ScriptedKeys, TerminalKeys};
