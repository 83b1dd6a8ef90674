//! Render module: Page-at-a-time output.

mod page;

pub use page::{PageStatus, Pager};
