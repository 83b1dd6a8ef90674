//! Pager dimensions.

use crate::error::{PagerError, Result};

/// Lines per page.
pub const PAGE_SIZE: usize = 20;

/// Maximum bytes per rendered line, not counting a trailing delimiter.
pub const LINE_WIDTH: usize = 80;

/// Default backing store size: one full page plus a delimiter per line.
pub const BUFFER_CAPACITY: usize = (LINE_WIDTH + 1) * PAGE_SIZE;

/// Configuration for a pager session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerConfig {
    /// Lines emitted per page.
    pub page_size: usize,
    /// Width limit for assembled lines.
    pub line_width: usize,
    /// Size of the read window's backing store.
    pub buffer_capacity: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            line_width: LINE_WIDTH,
            buffer_capacity: BUFFER_CAPACITY,
        }
    }
}

impl PagerConfig {
    /// Create a configuration with the given dimensions and a capacity
    /// derived the same way as the default.
    pub const fn with_dimensions(line_width: usize, page_size: usize) -> Self {
        Self {
            page_size,
            line_width,
            buffer_capacity: (line_width + 1) * page_size,
        }
    }

    /// Override the backing store capacity.
    #[must_use]
    pub const fn with_buffer_capacity(mut self, buffer_capacity: usize) -> Self {
        self.buffer_capacity = buffer_capacity;
        self
    }

    /// Check that the dimensions can drive a session.
    ///
    /// A bounded word scan may hold up to `line_width + 1` bytes in the
    /// window at once, so the capacity must be at least that.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(PagerError::InvalidConfig("page size must be at least 1".into()));
        }
        if self.line_width == 0 {
            return Err(PagerError::InvalidConfig("line width must be at least 1".into()));
        }
        if self.buffer_capacity <= self.line_width {
            return Err(PagerError::InvalidConfig(format!(
                "buffer capacity {} is smaller than line width + 1 ({})",
                self.buffer_capacity,
                self.line_width + 1
            )));
        }
        Ok(())
    }
}
