//! Configuration value objects for the domain layer
//!
//! Used by the infrastructure config loader to report problems.

mod issue;

pub use issue::{ConfigIssue, Severity};
