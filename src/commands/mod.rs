//! Command implementations

pub mod preview;
pub mod simple;

pub use preview::{PreviewResult, preview_word};
pub use simple::run_simple;
