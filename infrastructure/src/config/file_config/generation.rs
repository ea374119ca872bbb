//! Generation configuration from TOML (`[generation]` section)

use mentor_domain::{ConfigIssue, GenerationConfig, Model};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Provider model identifier
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub streaming: bool,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let defaults = GenerationConfig::default();
        Self {
            model: defaults.model.to_string(),
            temperature: defaults.temperature,
            max_output_tokens: defaults.max_output_tokens,
            streaming: defaults.streaming,
        }
    }
}

impl FileGenerationConfig {
    /// Convert to the domain value object, reporting invalid values.
    ///
    /// Invalid fields fall back to their defaults so the caller can decide
    /// whether the issues are fatal.
    pub fn to_generation_config(&self) -> (GenerationConfig, Vec<ConfigIssue>) {
        let defaults = GenerationConfig::default();
        let mut issues = Vec::new();

        let model = if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "generation.model",
                "model name cannot be empty",
            ));
            defaults.model.clone()
        } else {
            let Ok(model) = self.model.trim().parse::<Model>();
            model
        };

        let temperature = if (0.0..=2.0).contains(&self.temperature) {
            self.temperature
        } else {
            issues.push(ConfigIssue::error(
                "generation.temperature",
                format!("{} is outside the range 0.0..=2.0", self.temperature),
            ));
            defaults.temperature
        };

        let max_output_tokens = if self.max_output_tokens > 0 {
            self.max_output_tokens
        } else {
            issues.push(ConfigIssue::error(
                "generation.max_output_tokens",
                "must be at least 1",
            ));
            defaults.max_output_tokens
        };

        if model.is_custom() {
            issues.push(ConfigIssue::warning(
                "generation.model",
                format!("'{}' is not a known model; sending it as-is", model),
            ));
        }

        let config = GenerationConfig {
            model,
            temperature,
            max_output_tokens,
            streaming: self.streaming,
        };
        (config, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_converts_cleanly() {
        let (config, issues) = FileGenerationConfig::default().to_generation_config();
        assert!(issues.is_empty());
        assert_eq!(config, GenerationConfig::default());
    }

    #[test]
    fn test_out_of_range_values_fall_back() {
        let file = FileGenerationConfig {
            model: "  ".to_string(),
            temperature: 3.5,
            max_output_tokens: 0,
            streaming: false,
        };
        let (config, issues) = file.to_generation_config();
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.is_error()));
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.max_output_tokens, 200);
        assert_eq!(config.model, Model::Gemini25FlashLite);
        assert!(!config.streaming);
    }

    #[test]
    fn test_custom_model_warns() {
        let file = FileGenerationConfig {
            model: "my-tuned-model".to_string(),
            ..Default::default()
        };
        let (config, issues) = file.to_generation_config();
        assert_eq!(config.model, Model::Custom("my-tuned-model".to_string()));
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }
}
