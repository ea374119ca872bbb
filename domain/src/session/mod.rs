//! Mentoring session domain.
//!
//! - [`entities::Session`]: the module and ordered transcript of one session
//! - [`entities::Turn`]: a single user or mentor message
//! - [`window::ContextWindow`]: the recent turns shown to the model
//! - [`export`]: plain-text download format
//! - [`stream::StreamEvent`]: incremental model output

pub mod entities;
pub mod export;
pub mod stream;
pub mod window;
