//! Interactive chat module
//!
//! Provides the module selection screen and the reedline-based mentoring
//! REPL.

mod download;
mod repl;
mod selection;

pub use download::write_transcript;
pub use repl::MentorRepl;
pub use selection::parse_selection;
