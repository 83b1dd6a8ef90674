//! Page renderer: Emits fixed-size pages of assembled lines.
//!
//! Each page is staged in an [`OutputBuffer`] and flushed to the writer in
//! one go. Read failures are reported in-band with a sentinel line; write
//! failures are returned to the caller and end the session.

use crate::config::PagerConfig;
use crate::error::Result;
use crate::layout::LineAssembler;
use crate::terminal::{NewlineMode, OutputBuffer};
use log::debug;
use std::io::{Read, Write};

/// Outcome of rendering one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    /// A full page was written and more input remains.
    More,
    /// The input ran out; the end-of-input sentinel was written.
    EndOfInput,
    /// Reading the input failed; the error sentinel was written.
    ReadError,
}

impl PageStatus {
    /// Check if further pages can be rendered.
    pub const fn has_more(self) -> bool {
        matches!(self, Self::More)
    }
}

/// One pager session: the line source, the output and their progress.
#[derive(Debug)]
pub struct Pager<R, W> {
    lines: LineAssembler<R>,
    out: W,
    staging: OutputBuffer,
    page_size: usize,
    pages: u64,
    finished: Option<PageStatus>,
}

impl<R: Read, W: Write> Pager<R, W> {
    /// Create a pager reading `source` and writing to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::InvalidConfig`](crate::PagerError::InvalidConfig)
    /// if the configuration does not validate.
    pub fn new(source: R, out: W, config: PagerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            lines: LineAssembler::new(source, config.line_width, config.buffer_capacity),
            out,
            staging: OutputBuffer::with_capacity((config.line_width + 2) * (config.page_size + 1)),
            page_size: config.page_size,
            pages: 0,
            finished: None,
        })
    }

    /// Set how line feeds are written.
    #[must_use]
    pub fn with_newlines(mut self, newlines: NewlineMode) -> Self {
        self.staging = std::mem::take(&mut self.staging).with_newlines(newlines);
        self
    }

    /// Number of pages rendered so far.
    pub const fn pages_rendered(&self) -> u64 {
        self.pages
    }

    /// Get the final status once the input has ended or failed.
    pub const fn finished(&self) -> Option<PageStatus> {
        self.finished
    }

    /// Get the output writer.
    pub const fn writer(&self) -> &W {
        &self.out
    }

    /// Consume the pager and return the output writer.
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Render the next page.
    ///
    /// Writes up to `page_size` lines. The end-of-input sentinel follows
    /// as soon as the input is known to be exhausted, including when it
    /// ends exactly on a page boundary. Once the input has ended, further
    /// calls write nothing and return the final status again.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to the output fails.
    pub fn render_page(&mut self) -> Result<PageStatus> {
        if let Some(status) = self.finished {
            return Ok(status);
        }

        self.staging.clear();
        let mut written = 0;
        let mut status = PageStatus::More;

        while written < self.page_size {
            match self.lines.next_line() {
                Ok(Some(line)) => {
                    self.staging.write_line(&line.bytes);
                    written += 1;
                }
                Ok(None) => {
                    status = PageStatus::EndOfInput;
                    break;
                }
                Err(e) => {
                    debug!("read failed after {written} lines of page {}: {e}", self.pages + 1);
                    status = PageStatus::ReadError;
                    break;
                }
            }
        }

        if status == PageStatus::More {
            status = match self.lines.at_end() {
                Ok(true) => PageStatus::EndOfInput,
                Ok(false) => PageStatus::More,
                Err(e) => {
                    debug!("read failed after page {}: {e}", self.pages + 1);
                    PageStatus::ReadError
                }
            };
        }

        match status {
            PageStatus::More => {}
            PageStatus::EndOfInput => self.staging.write_end_of_input(),
            PageStatus::ReadError => self.staging.write_read_error(),
        }

        self.staging.flush_to(&mut self.out)?;
        self.pages += 1;
        if !status.has_more() {
            self.finished = Some(status);
        }
        debug!("page {} rendered: {written} lines, {status:?}", self.pages);
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{END_OF_INPUT, READ_ERROR};
    use pretty_assertions::assert_eq;
    use std::io::{self, Cursor};

    fn pager(text: &str, width: usize, page_size: usize) -> Pager<Cursor<Vec<u8>>, Vec<u8>> {
        let config = PagerConfig::with_dimensions(width, page_size);
        Pager::new(Cursor::new(text.as_bytes().to_vec()), Vec::new(), config).unwrap()
    }

    fn take_output(pager: &mut Pager<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(std::mem::take(&mut pager.out)).unwrap()
    }

    #[test]
    fn test_compact_example_pages() {
        let mut p = pager("abcdefgh ij\nklmno", 10, 1);

        assert_eq!(p.render_page().unwrap(), PageStatus::More);
        assert_eq!(take_output(&mut p), "abcdefgh \n");

        assert_eq!(p.render_page().unwrap(), PageStatus::More);
        assert_eq!(take_output(&mut p), "ij\n");

        assert_eq!(p.render_page().unwrap(), PageStatus::EndOfInput);
        assert_eq!(take_output(&mut p), format!("klmno\n{END_OF_INPUT}\n"));
    }

    #[test]
    fn test_short_page_then_sentinel() {
        let mut p = pager("one\ntwo\n", 80, 5);
        assert_eq!(p.render_page().unwrap(), PageStatus::EndOfInput);
        assert_eq!(take_output(&mut p), format!("one\ntwo\n{END_OF_INPUT}\n"));
    }

    #[test]
    fn test_full_page_stops_at_page_size() {
        let mut p = pager("1\n2\n3\n4\n5\n", 80, 2);
        assert_eq!(p.render_page().unwrap(), PageStatus::More);
        assert_eq!(take_output(&mut p), "1\n2\n");
        assert_eq!(p.render_page().unwrap(), PageStatus::More);
        assert_eq!(p.render_page().unwrap(), PageStatus::EndOfInput);
        assert_eq!(take_output(&mut p), format!("3\n4\n5\n{END_OF_INPUT}\n"));
    }

    #[test]
    fn test_input_ending_on_page_boundary() {
        let mut p = pager("a\nb\n", 80, 2);
        assert_eq!(p.render_page().unwrap(), PageStatus::EndOfInput);
        assert_eq!(take_output(&mut p), format!("a\nb\n{END_OF_INPUT}\n"));
    }

    #[test]
    fn test_render_after_end_is_noop() {
        let mut p = pager("only\n", 80, 20);
        assert_eq!(p.render_page().unwrap(), PageStatus::EndOfInput);
        take_output(&mut p);

        assert_eq!(p.render_page().unwrap(), PageStatus::EndOfInput);
        assert!(p.writer().is_empty());
        assert_eq!(p.pages_rendered(), 1);
        assert_eq!(p.finished(), Some(PageStatus::EndOfInput));
    }

    #[test]
    fn test_empty_input_shows_sentinel() {
        let mut p = pager("", 80, 20);
        assert_eq!(p.render_page().unwrap(), PageStatus::EndOfInput);
        assert_eq!(take_output(&mut p), format!("{END_OF_INPUT}\n"));
    }

    /// Serves its bytes, then fails instead of reporting end of input.
    struct FailAtEnd(Cursor<Vec<u8>>);

    impl Read for FailAtEnd {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.0.read(buf)? {
                0 => Err(io::Error::other("unplugged")),
                n => Ok(n),
            }
        }
    }

    fn failing_pager(text: &str, page_size: usize) -> Pager<FailAtEnd, Vec<u8>> {
        let source = FailAtEnd(Cursor::new(text.as_bytes().to_vec()));
        Pager::new(source, Vec::new(), PagerConfig::with_dimensions(80, page_size)).unwrap()
    }

    #[test]
    fn test_read_error_writes_sentinel() {
        let mut p = failing_pager("first\nsecond", 20);

        assert_eq!(p.render_page().unwrap(), PageStatus::ReadError);
        let out = String::from_utf8(p.into_writer()).unwrap();
        assert_eq!(out, format!("first\n{READ_ERROR}\n"));
    }

    #[test]
    fn test_read_error_in_look_ahead_after_full_page() {
        let mut p = failing_pager("a\nb\n", 2);

        assert_eq!(p.render_page().unwrap(), PageStatus::ReadError);
        assert_eq!(p.finished(), Some(PageStatus::ReadError));

        // Ended: a further page request writes nothing.
        assert_eq!(p.render_page().unwrap(), PageStatus::ReadError);
        let out = String::from_utf8(p.into_writer()).unwrap();
        assert_eq!(out, format!("a\nb\n{READ_ERROR}\n"));
    }

    #[test]
    fn test_write_failure_is_error() {
        struct ClosedPipe;
        impl Write for ClosedPipe {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let config = PagerConfig::default();
        let mut p = Pager::new(Cursor::new(b"text".to_vec()), ClosedPipe, config).unwrap();
        assert!(p.render_page().is_err());
    }

    #[test]
    fn test_crlf_output() {
        let mut p = pager("x\ny", 80, 20).with_newlines(NewlineMode::CrLf);
        p.render_page().unwrap();
        assert_eq!(take_output(&mut p), format!("x\r\ny\r\n{END_OF_INPUT}\r\n"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PagerConfig::with_dimensions(10, 2).with_buffer_capacity(4);
        assert!(Pager::new(Cursor::new(Vec::new()), Vec::new(), config).is_err());
    }
}
