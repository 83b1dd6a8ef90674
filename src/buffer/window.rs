//! Window: Fixed-capacity read window over a byte source.
//!
//! The window owns a backing store of `capacity` bytes and tracks the
//! region `[start, end)` of bytes that have been read from the source but
//! not yet consumed. Bytes outside that region are stale.
//!
//! ```text
//!  0          start              end          capacity
//!  ├──────────┼──────────────────┼──────────────┤
//!  │  stale   │   unconsumed     │    stale     │
//! ```
//!
//! When a scan runs off `end`, the unconsumed bytes are compacted to offset
//! zero and the rest of the store is refilled from the source.

use log::debug;
use std::io::{self, Read};

/// Fixed-capacity window over a [`Read`] source.
#[derive(Debug)]
pub struct Window<R> {
    /// The byte source.
    source: R,
    /// Backing store.
    store: Box<[u8]>,
    /// First unconsumed byte.
    start: usize,
    /// One past the last unconsumed byte.
    end: usize,
    /// Whether the most recent refill produced any bytes.
    has_data: bool,
}

impl<R: Read> Window<R> {
    /// Create an empty window with the given backing store capacity.
    ///
    /// Nothing is read until the first refill.
    pub fn new(source: R, capacity: usize) -> Self {
        Self {
            source,
            store: vec![0; capacity].into_boxed_slice(),
            start: 0,
            end: 0,
            has_data: false,
        }
    }

    /// Backing store capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    /// Unconsumed bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.store[self.start..self.end]
    }

    /// Number of unconsumed bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if every read byte has been consumed.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the most recent refill read at least one byte.
    #[inline]
    pub const fn has_data(&self) -> bool {
        self.has_data
    }

    /// Drop `count` bytes from the front of the window.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds [`len`](Self::len).
    #[inline]
    pub fn consume(&mut self, count: usize) {
        assert!(count <= self.len(), "consume past end of window");
        self.start += count;
    }

    /// Refill the store after the caller placed `preserved` unconsumed
    /// bytes at offset zero.
    ///
    /// Resets the window to `[0, preserved + read)`, where `read` is the
    /// number of fresh bytes read into `store[preserved..]`. Returns
    /// `Ok(0)` once the source is exhausted; the preserved bytes stay in
    /// the window either way. Interrupted reads are retried.
    pub fn refill(&mut self, preserved: usize) -> io::Result<usize> {
        if preserved >= self.store.len() {
            return Err(io::Error::other(format!(
                "refill with {preserved} preserved bytes leaves no room in a {}-byte window",
                self.store.len()
            )));
        }

        self.start = 0;
        self.end = preserved;

        let read = loop {
            match self.source.read(&mut self.store[preserved..]) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.has_data = false;
                    return Err(e);
                }
            }
        };

        self.has_data = read > 0;
        self.end += read;
        debug!("refill: preserved={preserved} read={read} window={}", self.len());
        Ok(read)
    }

    /// Slide the unconsumed bytes to offset zero and refill the rest.
    pub fn compact_and_refill(&mut self) -> io::Result<usize> {
        let preserved = self.len();
        self.store.copy_within(self.start..self.end, 0);
        self.refill(preserved)
    }
}
