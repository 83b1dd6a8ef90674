//! Terminal module: Output staging and raw input mode.

mod output;
mod raw;

pub use output::{NewlineMode, OutputBuffer, END_OF_INPUT, READ_ERROR};
pub use raw::RawModeGuard;
