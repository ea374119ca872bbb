//! Presentation layer for ai-chatbot-mentor
//!
//! This crate contains the CLI definition, console formatting, the
//! streaming reply printer, and the interactive mentoring REPL.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{MentorRepl, parse_selection, write_transcript};
pub use cli::commands::Cli;
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use progress::stream::StreamPrinter;
