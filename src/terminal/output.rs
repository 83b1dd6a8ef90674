//! `OutputBuffer`: Single-syscall staging buffer for rendered pages.

use std::io::Write;

/// Sentinel line written when the input is exhausted.
pub const END_OF_INPUT: &str = "=== EOF ===";

/// Sentinel line written when reading the input fails.
pub const READ_ERROR: &str = "(error reading file)";

/// How line feeds are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewlineMode {
    /// Bytes pass through untouched.
    #[default]
    Verbatim,
    /// Every `\n` becomes `\r\n`, for a terminal in raw mode.
    CrLf,
}

/// Pre-allocated buffer for building one page of output.
///
/// All output is accumulated here, then flushed in a single `write()` syscall.
#[derive(Debug)]
pub struct OutputBuffer {
    data: Vec<u8>,
    newlines: NewlineMode,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            newlines: NewlineMode::Verbatim,
        }
    }

    /// Create a buffer sized for one default page (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Set how line feeds are emitted.
    #[must_use]
    pub const fn with_newlines(mut self, newlines: NewlineMode) -> Self {
        self.newlines = newlines;
        self
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write raw bytes, translating line feeds per the newline mode.
    pub fn write_raw(&mut self, bytes: &[u8]) {
        match self.newlines {
            NewlineMode::Verbatim => self.data.extend_from_slice(bytes),
            NewlineMode::CrLf => {
                for chunk in bytes.split_inclusive(|&b| b == b'\n') {
                    match chunk.strip_suffix(b"\n") {
                        Some(body) => {
                            self.data.extend_from_slice(body);
                            self.data.extend_from_slice(b"\r\n");
                        }
                        None => self.data.extend_from_slice(chunk),
                    }
                }
            }
        }
    }

    /// Write one rendered line, adding a line feed if it lacks one.
    pub fn write_line(&mut self, line: &[u8]) {
        self.write_raw(line);
        if line.last() != Some(&b'\n') {
            self.write_raw(b"\n");
        }
    }

    /// Write the end-of-input sentinel line.
    pub fn write_end_of_input(&mut self) {
        self.write_line(END_OF_INPUT.as_bytes());
    }

    /// Write the read-error sentinel line.
    pub fn write_read_error(&mut self) {
        self.write_line(READ_ERROR.as_bytes());
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
