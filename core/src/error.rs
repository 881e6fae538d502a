//! Error types for the Pinterest API client.
//!
//! # Design
//! Three failure families stay distinguishable: the request never completed
//! (`Transport`), the server rejected it (`Api`), or the server answered with
//! a body we could not decode (`Decode`). Nothing is retried or swallowed.

use thiserror::Error;

/// Errors returned by every controller operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS, DNS or timeout failure in the transport.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server returned a non-2xx status.
    #[error("pinterest API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    /// A 2xx body did not match the expected schema.
    #[error("deserialization failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request payload could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Base URL and path do not form a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// HTTP status for `Api` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Failures raised by a `Transport` implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] ureq::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Errors from caller-supplied transports.
    #[error("{0}")]
    Custom(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_carries_status_and_message() {
        let err = ApiError::Api {
            status: 401,
            code: Some(3),
            message: "Authorization failed.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "pinterest API error (HTTP 401): Authorization failed."
        );
        assert_eq!(err.status(), Some(401));
        assert!(!err.is_not_found());
    }

    #[test]
    fn decode_error_has_no_status() {
        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ApiError::Decode(source);
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("deserialization failed"));
    }
}
