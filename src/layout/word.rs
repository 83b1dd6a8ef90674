//! Word scanner: Pulls delimiter-terminated words out of a [`Window`].

use crate::buffer::Window;
use std::io::{self, Read};

/// Check if a byte ends a word.
///
/// Carriage return is ordinary content.
#[inline]
pub const fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n')
}

/// Outcome of a bounded word scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// A word of this many bytes, trailing delimiter included, was
    /// appended to the output and consumed from the window.
    Found(usize),
    /// The window is empty and the source is exhausted.
    EndOfStream,
    /// The next word does not fit in the budget. Nothing was consumed.
    Overlong,
}

/// Splits a byte stream into words.
///
/// A word is a run of non-delimiter bytes followed by at most one
/// delimiter. The delimiter belongs to the word. The final word of a
/// stream may have none.
#[derive(Debug)]
pub struct WordScanner<R> {
    window: Window<R>,
}

impl<R: Read> WordScanner<R> {
    /// Create a scanner over `source` with a window of `capacity` bytes.
    pub fn new(source: R, capacity: usize) -> Self {
        Self {
            window: Window::new(source, capacity),
        }
    }

    /// Get the underlying window.
    pub const fn window(&self) -> &Window<R> {
        &self.window
    }

    /// Scan the next word if it fits in `max_size` content bytes plus one
    /// delimiter, appending it to `out`.
    ///
    /// On [`Scan::Overlong`], [`Scan::EndOfStream`] and I/O error the
    /// window keeps every byte it had, so the same word can be retried
    /// with a larger budget.
    ///
    /// `max_size + 1` must not exceed the window capacity.
    pub fn next_word(&mut self, max_size: usize, out: &mut Vec<u8>) -> io::Result<Scan> {
        let limit = max_size.saturating_add(1);
        let mut count = 0;

        loop {
            if count >= limit {
                return Ok(Scan::Overlong);
            }
            if count == self.window.len() && self.window.compact_and_refill()? == 0 {
                if count == 0 {
                    return Ok(Scan::EndOfStream);
                }
                break;
            }

            let byte = self.window.as_slice()[count];
            count += 1;
            if is_delimiter(byte) {
                break;
            }
        }

        out.extend_from_slice(&self.window.as_slice()[..count]);
        self.window.consume(count);
        Ok(Scan::Found(count))
    }

    /// Take the next word whatever its length, appending it to `out`.
    ///
    /// Unlike [`next_word`](Self::next_word) this drains the window as it
    /// goes, so the word may be longer than the window. An I/O error
    /// part-way through leaves the bytes already appended consumed.
    pub fn next_whole_word(&mut self, out: &mut Vec<u8>) -> io::Result<Scan> {
        let mut count = 0;

        loop {
            if self.window.is_empty() && self.window.compact_and_refill()? == 0 {
                break;
            }

            let available = self.window.as_slice();
            match available.iter().position(|&b| is_delimiter(b)) {
                Some(pos) => {
                    out.extend_from_slice(&available[..=pos]);
                    self.window.consume(pos + 1);
                    count += pos + 1;
                    break;
                }
                None => {
                    let taken = available.len();
                    out.extend_from_slice(available);
                    self.window.consume(taken);
                    count += taken;
                }
            }
        }

        Ok(if count == 0 {
            Scan::EndOfStream
        } else {
            Scan::Found(count)
        })
    }

    /// Check whether the stream has nothing left.
    ///
    /// Reads from the source only when the window is empty.
    pub fn at_end(&mut self) -> io::Result<bool> {
        if !self.window.is_empty() {
            return Ok(false);
        }
        Ok(self.window.compact_and_refill()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scanner(text: &[u8], capacity: usize) -> WordScanner<Cursor<Vec<u8>>> {
        WordScanner::new(Cursor::new(text.to_vec()), capacity)
    }

    #[test]
    fn test_delimiters() {
        assert!(is_delimiter(b' '));
        assert!(is_delimiter(b'\t'));
        assert!(is_delimiter(b'\n'));
        assert!(!is_delimiter(b'\r'));
        assert!(!is_delimiter(b'a'));
    }

    #[test]
    fn test_word_includes_delimiter() {
        let mut s = scanner(b"one two\nthree", 32);
        let mut out = Vec::new();

        assert_eq!(s.next_word(10, &mut out).unwrap(), Scan::Found(4));
        assert_eq!(s.next_word(10, &mut out).unwrap(), Scan::Found(4));
        assert_eq!(s.next_word(10, &mut out).unwrap(), Scan::Found(5));
        assert_eq!(s.next_word(10, &mut out).unwrap(), Scan::EndOfStream);
        assert_eq!(out, b"one two\nthree");
    }

    #[test]
    fn test_carriage_return_is_content() {
        let mut s = scanner(b"dos\r\nline", 16);
        let mut out = Vec::new();
        assert_eq!(s.next_word(10, &mut out).unwrap(), Scan::Found(5));
        assert_eq!(out, b"dos\r\n");
    }

    #[test]
    fn test_consecutive_delimiters_are_single_byte_words() {
        let mut s = scanner(b"a  b", 16);
        let mut out = Vec::new();
        assert_eq!(s.next_word(10, &mut out).unwrap(), Scan::Found(2));
        assert_eq!(s.next_word(10, &mut out).unwrap(), Scan::Found(1));
        assert_eq!(s.next_word(10, &mut out).unwrap(), Scan::Found(1));
    }

    #[test]
    fn test_overlong_consumes_nothing() {
        let mut s = scanner(b"abcdefgh ij", 16);
        let mut out = Vec::new();

        assert_eq!(s.next_word(4, &mut out).unwrap(), Scan::Overlong);
        assert!(out.is_empty());

        assert_eq!(s.next_word(8, &mut out).unwrap(), Scan::Found(9));
        assert_eq!(out, b"abcdefgh ");
    }

    #[test]
    fn test_delimiter_may_use_the_extra_byte() {
        let mut s = scanner(b"abcd efg", 16);
        let mut out = Vec::new();
        assert_eq!(s.next_word(4, &mut out).unwrap(), Scan::Found(5));
    }

    #[test]
    fn test_word_split_across_refill() {
        // Capacity 6: "hello " straddles the first refill boundary after "ab ".
        let mut s = scanner(b"ab hello world", 6);
        let mut out = Vec::new();

        assert_eq!(s.next_word(5, &mut out).unwrap(), Scan::Found(3));
        assert_eq!(s.next_word(5, &mut out).unwrap(), Scan::Found(6));
        assert_eq!(s.next_word(5, &mut out).unwrap(), Scan::Found(5));
        assert_eq!(out, b"ab hello world");
    }

    #[test]
    fn test_overlong_across_refill_keeps_bytes() {
        let mut s = scanner(b"x abcdefg", 6);
        let mut out = Vec::new();

        assert_eq!(s.next_word(5, &mut out).unwrap(), Scan::Found(2));
        assert_eq!(s.next_word(3, &mut out).unwrap(), Scan::Overlong);
        assert_eq!(s.window().as_slice(), b"abcd");

        out.clear();
        assert_eq!(s.next_whole_word(&mut out).unwrap(), Scan::Found(7));
        assert_eq!(out, b"abcdefg");
    }

    #[test]
    fn test_whole_word_longer_than_window() {
        let mut text = vec![b'z'; 50];
        text.extend_from_slice(b" tail");
        let mut s = scanner(&text, 8);
        let mut out = Vec::new();

        assert_eq!(s.next_whole_word(&mut out).unwrap(), Scan::Found(51));
        assert_eq!(&out[..], &text[..51]);

        out.clear();
        assert_eq!(s.next_word(7, &mut out).unwrap(), Scan::Found(4));
        assert_eq!(out, b"tail");
    }

    #[test]
    fn test_whole_word_at_end() {
        let mut s = scanner(b"", 8);
        let mut out = Vec::new();
        assert_eq!(s.next_whole_word(&mut out).unwrap(), Scan::EndOfStream);
    }

    #[test]
    fn test_at_end() {
        let mut s = scanner(b"w", 8);
        assert!(!s.at_end().unwrap());
        let mut out = Vec::new();
        s.next_word(4, &mut out).unwrap();
        assert!(s.at_end().unwrap());
    }

    #[test]
    fn test_read_error_consumes_nothing() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }
        }

        let mut s = WordScanner::new(Broken, 8);
        let mut out = Vec::new();
        assert!(s.next_word(4, &mut out).is_err());
        assert!(out.is_empty());
    }
}
