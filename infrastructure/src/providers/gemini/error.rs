//! Mapping of provider failures onto [`GatewayError`]

use super::types::{ApiError, ErrorEnvelope};
use mentor_application::GatewayError;

const QUOTA_STATUS: &str = "RESOURCE_EXHAUSTED";
const TOO_MANY_REQUESTS: u16 = 429;

/// Classify an API error object (from an error body or an SSE payload).
pub fn from_api_error(error: &ApiError) -> GatewayError {
    let detail = if error.status.is_empty() {
        error.message.clone()
    } else {
        format!("{}: {}", error.status, error.message)
    };

    if error.code == TOO_MANY_REQUESTS || error.status == QUOTA_STATUS {
        return GatewayError::QuotaExceeded(detail);
    }
    match error.code {
        401 | 403 => GatewayError::Authentication(detail),
        // An invalid key is reported as a 400 INVALID_ARGUMENT
        400 if error.message.contains("API key") => GatewayError::Authentication(detail),
        code => GatewayError::RequestFailed(format!("HTTP {}: {}", code, detail)),
    }
}

/// Classify a non-success HTTP response.
pub fn from_status(status: u16, body: &str) -> GatewayError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let mut error = envelope.error;
            if error.code == 0 {
                error.code = status;
            }
            from_api_error(&error)
        }
        Err(_) => from_api_error(&ApiError {
            code: status,
            message: body.trim().to_string(),
            status: String::new(),
        }),
    }
}

/// Classify a transport-level failure from the HTTP client.
pub fn from_transport(error: &reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::ConnectionError(format!("request timed out: {}", error))
    } else if error.is_decode() {
        GatewayError::MalformedResponse(error.to_string())
    } else if let Some(status) = error.status() {
        from_status(status.as_u16(), "")
    } else {
        GatewayError::ConnectionError(error.to_string())
    }
}
