//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Transport failure: connection refused, DNS, or a malformed body
    /// discovered while decoding.
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Any non-2xx response. `reason` is the HTTP reason phrase.
    #[error("API error {status} {reason}")]
    Status { status: u16, reason: String },
}

impl HttpError {
    /// Uniform mapping from a non-success status code to an error.
    pub(crate) fn from_status(status: u16, reason: Option<&str>) -> Self {
        HttpError::Status {
            status,
            reason: reason.unwrap_or("").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_contains_code() {
        let err = HttpError::from_status(404, Some("Not Found"));
        let msg = err.to_string();
        assert!(msg.contains("404"), "message should carry the status: {msg}");
        assert!(msg.contains("Not Found"));
    }

    #[test]
    fn test_status_error_without_reason_phrase() {
        let err = HttpError::from_status(599, None);
        assert_eq!(err.to_string(), "API error 599 ");
    }

    #[test]
    fn test_sdk_error_wraps_http() {
        let err: SdkError = HttpError::from_status(500, Some("Internal Server Error")).into();
        assert!(err.to_string().contains("500"));
    }
}
