//! CLI commands
//!
//! Command implementations for the `track-submission` binary.

mod parse;
mod progress;
mod style;
mod track;

pub use parse::run_parse;
pub use track::run_track;
