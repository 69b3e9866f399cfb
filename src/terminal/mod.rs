//! Shared terminal utilities.
//!
//! Box drawing, progress bars, terminal mode guards, and ANSI helpers.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
