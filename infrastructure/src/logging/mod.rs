//! Structured conversation logging.
//!
//! Provides [`JsonlConversationLogger`], the JSONL sink behind the
//! [`ConversationLogger`](mentor_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
