use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by the backend on a failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

#[derive(Debug, Error)]
#[error("request failed with status {status}: {message}")]
pub struct ApiException {
    pub status: u16,
    pub message: String,
}

impl ApiException {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Uses the backend's `{ "message": ... }` body when there is one, the raw
    /// body otherwise.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiError>(body)
            .map(|err| err.message)
            .unwrap_or_else(|_| body.trim().to_string());
        Self::new(status, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_structured_message_body() {
        let err = ApiException::from_body(404, r#"{"message":"Employee not found"}"#);
        assert_eq!(err.message, "Employee not found");
        assert_eq!(
            err.to_string(),
            "request failed with status 404: Employee not found"
        );
    }

    #[test]
    fn falls_back_to_raw_body() {
        let err = ApiException::from_body(502, "Bad Gateway\n");
        assert_eq!(err.message, "Bad Gateway");
    }
}
