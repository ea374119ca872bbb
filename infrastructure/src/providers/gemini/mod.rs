//! Google Gemini adapter
//!
//! Talks to the Generative Language REST API, streaming over server-sent
//! events when enabled.

mod error;
mod gateway;
mod sse;
mod types;

pub use gateway::GeminiGateway;
pub use sse::SseDecoder;
