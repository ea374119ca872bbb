//! Session controller use case.
//!
//! Owns one mentoring [`Session`] and runs each user turn through the model:
//!
//! 1. Append the user turn
//! 2. Take the context window (after the append, so the question is in it)
//! 3. Build the instruction with [`MentorPrompt`]
//! 4. Stream the reply, reporting the accumulated text to a [`ResponseObserver`]
//! 5. Commit exactly one assistant turn, or propagate a provider error
//!
//! Quota errors are turned into a fixed apology turn. Every other gateway
//! error is returned to the caller and leaves the unanswered user turn in
//! the transcript.

use crate::config::SessionParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::response_observer::ResponseObserver;
use chrono::Utc;
use mentor_domain::util::preview;
use mentor_domain::{
    ContextWindow, DomainError, GenerationConfig, MentorPrompt, Module, Question, Session, Turn,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Assistant turn committed when the provider reports a rate/quota limit.
pub const QUOTA_EXCEEDED_MESSAGE: &str = "API quota exceeded. Please wait and try again.";

/// Errors returned by [`SessionController::submit`].
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("No active session: select a module first")]
    InactiveSession,

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Provider error: {0}")]
    Provider(#[from] GatewayError),
}

/// Outcome of a submitted turn that produced an assistant turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The model answered; holds the full streamed text.
    Answered(String),
    /// The quota apology was recorded instead of an answer.
    QuotaExceeded,
}

impl Reply {
    /// Text of the committed assistant turn.
    pub fn text(&self) -> &str {
        match self {
            Reply::Answered(text) => text,
            Reply::QuotaExceeded => QUOTA_EXCEEDED_MESSAGE,
        }
    }
}

/// `Unselected` until a module is chosen; re-selection replaces the session.
#[derive(Debug)]
enum SessionState {
    Unselected,
    Active(Session),
}

/// Orchestrates one mentoring session.
///
/// `submit` takes `&mut self`, so turns of one session are strictly
/// sequential. Independent sessions are independent controllers.
pub struct SessionController {
    gateway: Arc<dyn LlmGateway>,
    params: SessionParams,
    state: SessionState,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl SessionController {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: SessionParams) -> Self {
        Self {
            gateway,
            params,
            state: SessionState::Unselected,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn params(&self) -> &SessionParams {
        &self.params
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active(_))
    }

    /// The module of the active session, if any.
    pub fn module(&self) -> Option<Module> {
        match &self.state {
            SessionState::Active(session) => Some(session.module()),
            SessionState::Unselected => None,
        }
    }

    /// Begin a fresh session, discarding any previous transcript.
    pub fn start_session(&mut self, module: Module) {
        if let SessionState::Active(previous) = &self.state {
            debug!(
                "Discarding {} session with {} turns",
                previous.module().as_str(),
                previous.len()
            );
        }
        info!("Starting mentoring session: {}", module.title());

        self.state = SessionState::Active(Session::new(module));
        self.conversation_logger.log(ConversationEvent::new(
            "session_started",
            serde_json::json!({ "module": module.as_str() }),
        ));
    }

    /// Parse `name` as a module and start a session with it.
    ///
    /// An unknown name fails before the current session is touched.
    pub fn start_session_named(&mut self, name: &str) -> Result<Module, DomainError> {
        let module: Module = name.parse()?;
        self.start_session(module);
        Ok(module)
    }

    /// Current transcript in order; empty while no module is selected.
    pub fn transcript(&self) -> &[Turn] {
        match &self.state {
            SessionState::Active(session) => session.transcript(),
            SessionState::Unselected => &[],
        }
    }

    /// Transcript as downloadable plain text.
    pub fn export_text(&self) -> String {
        match &self.state {
            SessionState::Active(session) => session.export_text(),
            SessionState::Unselected => String::new(),
        }
    }

    /// The most recent turns, as the next prompt would see them before the
    /// new question is appended.
    pub fn context_window(&self) -> ContextWindow<'_> {
        ContextWindow::from_transcript(self.transcript(), self.params.context_window)
    }

    /// Run one user turn through the model.
    ///
    /// On `Ok`, exactly two turns were appended (user, assistant). On
    /// `Err(SubmitError::Provider)`, only the user turn was appended.
    /// Validation errors append nothing.
    pub async fn submit(
        &mut self,
        user_text: &str,
        observer: &dyn ResponseObserver,
    ) -> Result<Reply, SubmitError> {
        let session = match &mut self.state {
            SessionState::Active(session) => session,
            SessionState::Unselected => return Err(SubmitError::InactiveSession),
        };
        let question = Question::parse(user_text).map_err(|_| SubmitError::EmptyMessage)?;
        let module = session.module();

        info!("[{}] User: {}", module.as_str(), preview(question.content(), 100));
        session.append(Turn::user(question.content()).at(Utc::now()));
        self.conversation_logger.log(ConversationEvent::new(
            "user_turn",
            serde_json::json!({
                "module": module.as_str(),
                "text": question.content(),
            }),
        ));

        let instruction = {
            let window = session.context_window(self.params.context_window);
            debug!(
                "Context window: {} of {} turns",
                window.len(),
                session.len()
            );
            MentorPrompt::build(module, &window, question.content())
        };
        debug!("Instruction assembled ({} bytes)", instruction.len());

        observer.on_stream_start(module);
        let result = Self::stream_reply(
            self.gateway.as_ref(),
            &self.params.generation,
            &instruction,
            observer,
        )
        .await;

        match result {
            Ok(text) => {
                if text.is_empty() {
                    warn!("Model returned an empty reply");
                }
                info!("[{}] Mentor replied ({} bytes)", module.as_str(), text.len());
                session.append(Turn::assistant(text.clone()).at(Utc::now()));
                self.conversation_logger.log(ConversationEvent::new(
                    "assistant_turn",
                    serde_json::json!({
                        "module": module.as_str(),
                        "model": self.params.generation.model.to_string(),
                        "bytes": text.len(),
                        "text": text,
                    }),
                ));
                observer.on_stream_end();
                Ok(Reply::Answered(text))
            }
            Err(GatewayError::QuotaExceeded(detail)) => {
                warn!("Provider quota exceeded: {}", detail);
                observer.on_partial(QUOTA_EXCEEDED_MESSAGE);
                session.append(Turn::assistant(QUOTA_EXCEEDED_MESSAGE).at(Utc::now()));
                self.conversation_logger.log(ConversationEvent::new(
                    "quota_exceeded",
                    serde_json::json!({
                        "module": module.as_str(),
                        "detail": detail,
                    }),
                ));
                observer.on_stream_end();
                Ok(Reply::QuotaExceeded)
            }
            Err(e) => {
                error!("Provider failed to respond: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "provider_error",
                    serde_json::json!({
                        "module": module.as_str(),
                        "error": e.to_string(),
                    }),
                ));
                Err(SubmitError::Provider(e))
            }
        }
    }

    /// Single attempt: open the stream and accumulate deltas into one reply.
    async fn stream_reply(
        gateway: &dyn LlmGateway,
        config: &GenerationConfig,
        instruction: &str,
        observer: &dyn ResponseObserver,
    ) -> Result<String, GatewayError> {
        let mut handle = gateway.generate_stream(instruction, config).await?;
        let mut buffer = String::new();
        let mut deltas = 0usize;
        while let Some(delta) = handle.next_delta().await? {
            deltas += 1;
            buffer.push_str(&delta);
            observer.on_partial(&buffer);
        }
        debug!("Stream finished after {} deltas", deltas);
        Ok(buffer)
    }
}
