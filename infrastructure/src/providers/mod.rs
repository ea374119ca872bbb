//! Text-generation provider adapters

pub mod gemini;

pub use gemini::GeminiGateway;
