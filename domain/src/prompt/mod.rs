//! Prompt domain
//!
//! The instruction template that scopes the model to one learning module.

mod template;

pub use template::MentorPrompt;
