//! Generation settings sent with every model call

use super::model::Model;
use serde::{Deserialize, Serialize};

/// Sampling and output settings for one generation request (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub model: Model,
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// Request incremental deltas instead of a single completed response
    pub streaming: bool,
}

impl GenerationConfig {
    pub const DEFAULT_TEMPERATURE: f32 = 0.3;
    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 200;

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn with_streaming(mut self, streaming: bool) -> Self {
        self.streaming = streaming;
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: Self::DEFAULT_TEMPERATURE,
            max_output_tokens: Self::DEFAULT_MAX_OUTPUT_TOKENS,
            streaming: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.model, Model::Gemini25FlashLite);
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.max_output_tokens, 200);
        assert!(config.streaming);
    }

    #[test]
    fn test_builders() {
        let config = GenerationConfig::default()
            .with_model(Model::Gemini25Pro)
            .with_temperature(0.9)
            .with_max_output_tokens(1024)
            .with_streaming(false);
        assert_eq!(config.model, Model::Gemini25Pro);
        assert_eq!(config.temperature, 0.9);
        assert_eq!(config.max_output_tokens, 1024);
        assert!(!config.streaming);
    }
}
