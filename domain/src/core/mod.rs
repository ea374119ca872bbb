//! Core domain concepts shared across all subdomains.
//!
//! - [`module::Module`]: the learning module a session is scoped to
//! - [`model::Model`]: text-generation model identifiers
//! - [`generation::GenerationConfig`]: per-request sampling settings
//! - [`question::Question`]: validated, non-blank user text
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod generation;
pub mod model;
pub mod module;
pub mod question;
