//! Error message extraction for failed API calls.
//!
//! Every failure ends up as a human-readable message in transient
//! notification state; none is fatal. The taxonomy is small: transport
//! failures (the request never completed) and non-2xx responses, which may
//! or may not carry a JSON `{"error": "..."}` body.

use crate::models::ErrorBody;

/// A failed API call, already reduced to something displayable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// Build the error for a non-2xx response.
    ///
    /// The backend is expected to return `{"error": "..."}`; when the body
    /// is not parseable JSON of that shape, the caller-supplied fallback
    /// (e.g. "Failed to fetch books") is used instead.
    pub fn from_response(status: u16, body: &[u8], fallback: &str) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .map(|body| body.error)
            .unwrap_or_else(|_| fallback.to_string());
        Self::Status { status, message }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_message_is_surfaced_verbatim() {
        let err = ApiError::from_response(404, br#"{"error":"not found"}"#, "Failed to fetch books");
        assert_eq!(err.to_string(), "not found");
    }

    #[test]
    fn test_unparseable_body_falls_back_to_generic_message() {
        let err = ApiError::from_response(500, b"<html>oops</html>", "Failed to fetch books");
        assert_eq!(err.to_string(), "Failed to fetch books");
    }

    #[test]
    fn test_empty_body_falls_back_to_generic_message() {
        let err = ApiError::from_response(502, b"", "Failed to create book");
        assert_eq!(err.to_string(), "Failed to create book");
    }

    #[test]
    fn test_wrong_shape_body_falls_back() {
        let err = ApiError::from_response(400, br#"{"message":"bad"}"#, "Failed to save author");
        assert_eq!(err.to_string(), "Failed to save author");
    }

    #[test]
    fn test_transport_error_displays_message() {
        let err = ApiError::transport("connection refused");
        assert_eq!(err.to_string(), "connection refused");
    }
}
