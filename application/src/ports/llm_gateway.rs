//! LLM Gateway port
//!
//! Defines the interface for communicating with text-generation providers.

use async_trait::async_trait;
use mentor_domain::{FailureKind, GenerationConfig, StreamEvent, StreamFailure};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The provider rejected the call for rate or quota reasons.
    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Quota errors are the only kind the session controller recovers from.
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, GatewayError::QuotaExceeded(_))
    }

    /// Terminal stream event carrying this error, for adapters that fail
    /// after the stream has started.
    pub fn into_stream_event(self) -> StreamEvent {
        let (kind, message) = match self {
            GatewayError::QuotaExceeded(message) => return StreamEvent::QuotaExceeded(message),
            GatewayError::ConnectionError(message) => (FailureKind::Connection, message),
            GatewayError::Authentication(message) => (FailureKind::Authentication, message),
            GatewayError::RequestFailed(message) => (FailureKind::Request, message),
            GatewayError::MalformedResponse(message) => (FailureKind::Malformed, message),
            GatewayError::Other(message) => (FailureKind::Other, message),
        };
        StreamEvent::Error(StreamFailure::new(kind, message))
    }
}

impl From<StreamFailure> for GatewayError {
    fn from(failure: StreamFailure) -> Self {
        match failure.kind {
            FailureKind::Connection => GatewayError::ConnectionError(failure.message),
            FailureKind::Authentication => GatewayError::Authentication(failure.message),
            FailureKind::Request => GatewayError::RequestFailed(failure.message),
            FailureKind::Malformed => GatewayError::MalformedResponse(failure.message),
            FailureKind::Other => GatewayError::Other(failure.message),
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to a model provider.
/// Implementations (adapters) live in the infrastructure layer. Adapters make
/// exactly one provider call per invocation and never retry.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Start generating a response to `instruction`.
    ///
    /// Errors detected before any output (bad status, quota, network) are
    /// returned directly; errors after the stream has started arrive as
    /// terminal [`StreamEvent`]s on the handle.
    async fn generate_stream(
        &self,
        instruction: &str,
        config: &GenerationConfig,
    ) -> Result<StreamHandle, GatewayError>;

    /// Generate and wait for the whole response.
    async fn generate(
        &self,
        instruction: &str,
        config: &GenerationConfig,
    ) -> Result<String, GatewayError> {
        self.generate_stream(instruction, config)
            .await?
            .collect_text()
            .await
    }
}

/// Handle for receiving streaming events from a generation call.
///
/// Wraps an `mpsc::Receiver<StreamEvent>`. A handle is consumed once; there
/// is no way to replay a stream.
pub struct StreamHandle {
    pub receiver: mpsc::Receiver<StreamEvent>,
    seen_text: bool,
    finished: bool,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self {
            receiver,
            seen_text: false,
            finished: false,
        }
    }

    /// Build a handle that replays a fixed list of events.
    ///
    /// Used by non-streaming adapters to fit the streaming contract.
    pub fn from_events(events: Vec<StreamEvent>) -> Self {
        let (tx, rx) = mpsc::channel(events.len().max(1));
        for event in events {
            // Capacity covers every event, so this cannot fail
            let _ = tx.try_send(event);
        }
        Self::new(rx)
    }

    /// Next non-empty text delta, `Ok(None)` at end of stream.
    ///
    /// A `Completed` event only yields text when no delta was seen before it
    /// (adapters that deliver the whole answer at once). A channel that closes
    /// without a terminal event is treated as a normal end.
    pub async fn next_delta(&mut self) -> Result<Option<String>, GatewayError> {
        if self.finished {
            return Ok(None);
        }
        while let Some(event) = self.receiver.recv().await {
            match event {
                StreamEvent::Delta(chunk) => {
                    if chunk.is_empty() {
                        continue;
                    }
                    self.seen_text = true;
                    return Ok(Some(chunk));
                }
                StreamEvent::Completed(text) => {
                    self.finished = true;
                    if !self.seen_text && !text.is_empty() {
                        self.seen_text = true;
                        return Ok(Some(text));
                    }
                    return Ok(None);
                }
                StreamEvent::QuotaExceeded(message) => {
                    self.finished = true;
                    return Err(GatewayError::QuotaExceeded(message));
                }
                StreamEvent::Error(failure) => {
                    self.finished = true;
                    return Err(failure.into());
                }
            }
        }
        self.finished = true;
        Ok(None)
    }

    /// Consume the stream and collect all text into a single string.
    pub async fn collect_text(mut self) -> Result<String, GatewayError> {
        let mut full_text = String::new();
        while let Some(chunk) = self.next_delta().await? {
            full_text.push_str(&chunk);
        }
        Ok(full_text)
    }
}
