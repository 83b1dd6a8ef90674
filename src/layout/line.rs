//! Line assembler: Packs words into width-bounded lines.

use super::word::{Scan, WordScanner};
use std::io::{self, Read};

/// Why a line ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    /// The last word carried a line feed.
    Newline,
    /// The accumulated length reached the line width.
    Width,
    /// The next word did not fit; it starts the following line.
    Deferred,
    /// The stream ended after a partial line.
    EndOfStream,
    /// A single word too long for any line, passed through intact.
    Whole,
}

/// One assembled line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Raw bytes, including any trailing line feed.
    pub bytes: Vec<u8>,
    /// Why the line ended.
    pub end: LineEnd,
}

impl Line {
    /// Get the line length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the line holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Check if the line's own bytes end in a line feed.
    pub fn is_terminated(&self) -> bool {
        self.bytes.last() == Some(&b'\n')
    }
}

/// Assembles lines of at most `width` bytes from a word stream.
///
/// A word that ends in a delimiter may use one byte past `width` for that
/// delimiter. A word that cannot fit on an empty line is emitted whole.
#[derive(Debug)]
pub struct LineAssembler<R> {
    words: WordScanner<R>,
    width: usize,
}

impl<R: Read> LineAssembler<R> {
    /// Create an assembler over `source`.
    ///
    /// `capacity` must be greater than `width`.
    pub fn new(source: R, width: usize, capacity: usize) -> Self {
        Self {
            words: WordScanner::new(source, capacity),
            width,
        }
    }

    /// Check whether the stream has nothing left. See [`WordScanner::at_end`].
    pub fn at_end(&mut self) -> io::Result<bool> {
        self.words.at_end()
    }

    /// Assemble the next line.
    ///
    /// Returns `Ok(None)` at a clean end of stream. An I/O error discards
    /// whatever had been accumulated for the line.
    pub fn next_line(&mut self) -> io::Result<Option<Line>> {
        let mut bytes = Vec::with_capacity(self.width + 1);

        let end = loop {
            let budget = self.width - bytes.len();
            match self.words.next_word(budget, &mut bytes)? {
                Scan::Found(_) => {
                    if bytes.last() == Some(&b'\n') {
                        break LineEnd::Newline;
                    }
                    if bytes.len() >= self.width {
                        break LineEnd::Width;
                    }
                }
                Scan::Overlong if bytes.is_empty() => {
                    self.words.next_whole_word(&mut bytes)?;
                    break LineEnd::Whole;
                }
                Scan::Overlong => break LineEnd::Deferred,
                Scan::EndOfStream if bytes.is_empty() => return Ok(None),
                Scan::EndOfStream => break LineEnd::EndOfStream,
            }
        };

        Ok(Some(Line { bytes, end }))
    }
}
