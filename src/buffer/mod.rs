//! Buffer module: The fixed-capacity read window.
//!
//! This module contains:
//! - [`Window`]: A backing store with a sliding region of unconsumed bytes,
//!   compacted and refilled from a [`std::io::Read`] source

mod window;

pub use window::Window;
