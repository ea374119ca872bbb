//! Session parameters: per-controller knobs.
//!
//! [`SessionParams`] groups the values a [`SessionController`] needs on every
//! turn: how much history to replay and how to call the model.
//!
//! [`SessionController`]: crate::use_cases::session_controller::SessionController

use mentor_domain::{DEFAULT_CONTEXT_WINDOW, GenerationConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionParams {
    /// Number of most recent turns included in each prompt.
    pub context_window: usize,
    /// Settings forwarded to the model gateway.
    pub generation: GenerationConfig,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            context_window: DEFAULT_CONTEXT_WINDOW,
            generation: GenerationConfig::default(),
        }
    }
}

impl SessionParams {
    pub fn with_context_window(mut self, turns: usize) -> Self {
        self.context_window = turns;
        self
    }

    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }
}
