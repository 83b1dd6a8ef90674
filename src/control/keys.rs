//! Keys and commands.
//!
//! Keystrokes come from a [`KeySource`]. The terminal implementation reads
//! crossterm events; tests script their own.

use crossterm::event::{self, Event, KeyEventKind};
use std::io;

/// Key codes the pager can receive.
///
/// This is a reduced subset of crossterm's `KeyCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Enter/Return key.
    Enter,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    /// Only Control held.
    pub const CONTROL: Self = Self {
        shift: false,
        control: true,
        alt: false,
    };
}

/// A single keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers held during keypress.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// A plain character key with no modifiers.
    pub const fn char(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
        }
    }
}

/// Pager commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the next page (`f`).
    NextPage,
    /// End the session (`q`, or Ctrl+C while in raw mode).
    Quit,
}

impl Command {
    /// Map a keystroke to a command. Unrecognized keys map to `None`.
    pub const fn from_key(key: KeyPress) -> Option<Self> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.control => Some(Self::Quit),
            KeyCode::Char('f') => Some(Self::NextPage),
            KeyCode::Char('q') => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Blocking source of keystrokes.
pub trait KeySource {
    /// Wait for the next keystroke.
    ///
    /// Returns `Ok(None)` when no more input will arrive.
    fn next_key(&mut self) -> io::Result<Option<KeyPress>>;
}

/// Keystrokes read from the controlling terminal.
///
/// Meant to be used while a [`RawModeGuard`](crate::terminal::RawModeGuard)
/// is held, so keys arrive immediately and unechoed.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    /// Create a terminal key source.
    pub const fn new() -> Self {
        Self
    }

    /// Convert a crossterm event to a keystroke.
    fn convert_event(event: Event) -> Option<KeyPress> {
        match event {
            Event::Key(key_event) => {
                // Only process key press events (not release or repeat)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(KeyPress {
                    code: Self::convert_key_code(key_event.code)?,
                    modifiers: Self::convert_modifiers(key_event.modifiers),
                })
            }
            _ => None,
        }
    }

    fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
        Some(match code {
            event::KeyCode::Char(c) => KeyCode::Char(c),
            event::KeyCode::Enter => KeyCode::Enter,
            _ => return None, // Ignore other key codes
        })
    }

    fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
        KeyModifiers {
            shift: mods.contains(event::KeyModifiers::SHIFT),
            control: mods.contains(event::KeyModifiers::CONTROL),
            alt: mods.contains(event::KeyModifiers::ALT),
        }
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<Option<KeyPress>> {
        loop {
            if let Some(key) = Self::convert_event(event::read()?) {
                return Ok(Some(key));
            }
        }
    }
}

/// Replays a fixed list of keystrokes, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: std::collections::VecDeque<KeyPress>,
}

impl ScriptedKeys {
    /// Script plain character keys.
    pub fn from_chars(chars: &str) -> Self {
        Self {
            keys: chars.chars().map(KeyPress::char).collect(),
        }
    }

    /// Append a keystroke.
    pub fn push(&mut self, key: KeyPress) {
        self.keys.push_back(key);
    }

    /// Number of keystrokes not yet read.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<Option<KeyPress>> {
        Ok(self.keys.pop_front())
    }
}
