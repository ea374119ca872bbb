//! Domain layer for ai-chatbot-mentor
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Module**: the subject a mentoring session is scoped to
//! - **Session**: the module plus an append-only transcript of turns
//! - **Context Window**: the last few turns, replayed to the model each time
//! - **MentorPrompt**: the instruction text that keeps the model on-topic

pub mod config;
pub mod core;
pub mod prompt;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, Severity};
pub use core::{
    error::DomainError, generation::GenerationConfig, model::Model, module::Module,
    question::Question,
};
pub use prompt::MentorPrompt;
pub use session::{
    entities::{Role, Session, Turn},
    export::{export_file_name, export_text},
    stream::{FailureKind, StreamEvent, StreamFailure},
    window::{ContextWindow, DEFAULT_CONTEXT_WINDOW},
};
