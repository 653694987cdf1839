//! Typed errors surfaced by media API calls.

use thiserror::Error;

/// Failure modes of a media API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure before a complete HTTP response was available.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {raw_body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Body parsed as JSON, when it was JSON.
        body: Option<serde_json::Value>,
        /// Raw body text as received.
        raw_body: String,
        /// Response headers as name/value pairs.
        headers: Vec<(String, String)>,
    },

    /// A success response whose body did not decode into the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code, when the server produced a complete response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|status| status.as_u16()),
            ApiError::Decode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_error_reports_code_and_body() {
        let err = ApiError::Status {
            status: 507,
            body: Some(serde_json::json!({"message": "disk full"})),
            raw_body: r#"{"message": "disk full"}"#.to_string(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
        };

        assert_eq!(err.status(), Some(507));
        assert_eq!(err.to_string(), r#"HTTP 507: {"message": "disk full"}"#);
    }

    #[test]
    fn decode_error_has_no_status() {
        let err = ApiError::Decode("expected a sequence".to_string());

        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "invalid response body: expected a sequence");
    }
}
