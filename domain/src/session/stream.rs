//! Streaming events for model responses.
//!
//! [`StreamEvent`] represents individual events in a streaming model
//! response, enabling live display of the mentor's answer as it arrives.

/// An event in a streaming model response.
///
/// Bridges infrastructure-level streaming (SSE chunks from the provider) to
/// the application layer. A well-formed stream is zero or more `Delta`s
/// followed by exactly one terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A text fragment from the model.
    Delta(String),
    /// The complete response text (signals stream end).
    Completed(String),
    /// The provider refused the request for rate or quota reasons.
    QuotaExceeded(String),
    /// Any other failure that occurred during streaming.
    Error(StreamFailure),
}

/// What went wrong when a stream failed, so the kind survives the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Connection,
    Authentication,
    Request,
    Malformed,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl StreamFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_keeps_kind_and_message() {
        let event = StreamEvent::Error(StreamFailure::new(FailureKind::Authentication, "denied"));
        match event {
            StreamEvent::Error(failure) => {
                assert_eq!(failure.kind, FailureKind::Authentication);
                assert_eq!(failure.message, "denied");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
