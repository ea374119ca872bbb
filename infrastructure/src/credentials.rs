//! API key resolution.
//!
//! The key comes from, in order: `provider.api_key` in the config, the env
//! var named by `provider.api_key_env`, then the legacy `gemini` variable.
//! Blank values count as missing.

use crate::config::FileProviderConfig;
use thiserror::Error;

/// Env var name accepted for compatibility with older `.env` files
pub const LEGACY_API_KEY_ENV: &str = "gemini";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Gemini API key not found. Set {0} (or add it to .env)")]
    Missing(String),
}

/// A provider API key. `Debug` output never contains the key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Resolve the API key from the config and the process environment.
pub fn resolve_api_key(config: &FileProviderConfig) -> Result<ApiKey, CredentialError> {
    resolve_with(config, |name| std::env::var(name).ok())
}

fn resolve_with<F>(config: &FileProviderConfig, lookup: F) -> Result<ApiKey, CredentialError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

    if let Some(key) = non_blank(config.api_key.clone()) {
        return Ok(ApiKey::new(key.trim()));
    }

    let env_name = config.api_key_env.trim();
    let from_env = if env_name.is_empty() {
        None
    } else {
        non_blank(lookup(env_name))
    };

    from_env
        .or_else(|| non_blank(lookup(LEGACY_API_KEY_ENV)))
        .map(|key| ApiKey::new(key.trim()))
        .ok_or_else(|| CredentialError::Missing(env_name.to_string()))
}
