//! Application layer for ai-chatbot-mentor
//!
//! This crate contains the session controller use case, port definitions,
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway, StreamHandle},
    response_observer::{NoResponseObserver, ResponseObserver},
};
pub use use_cases::session_controller::{
    QUOTA_EXCEEDED_MESSAGE, Reply, SessionController, SubmitError,
};
