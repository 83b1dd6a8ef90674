//! Layout module: Turns bytes into words and words into lines.
//!
//! Tokenization works on raw bytes. Space, tab and line feed end a word and
//! stay attached to it; every other byte, carriage return included, is
//! word content.

mod line;
mod word;

pub use line::{Line, LineAssembler, LineEnd};
pub use word::{is_delimiter, Scan, WordScanner};
