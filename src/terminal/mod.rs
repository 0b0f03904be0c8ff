//! Shared terminal utilities.
//!
//! Box drawing, the progress bar, and the progress sinks built on them.

mod output;
mod progress;

pub use output::*;
pub use progress::{LogProgress, TerminalProgress};
