//! Error types for request building, execution and code generation.

use thiserror::Error;

/// Message returned with status 400 when the endpoint is missing.
pub const ENDPOINT_REQUIRED: &str = "API endpoint is required";

/// Errors raised while turning a `TestRequest` into a `BuiltRequest`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// `apiEndpoint` was absent or blank.
    #[error("{}", ENDPOINT_REQUIRED)]
    InvalidRequest,
}

/// Errors raised by a [`Transport`](crate::http::client::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The TCP/TLS connection to the target could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// Any other failure while sending or reading the response.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors raised after a request was built.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("failed to format response: {0}")]
    Format(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{}", ENDPOINT_REQUIRED)]
    MissingEndpoint,

    /// The body cannot be embedded in the target dialect verbatim.
    #[error("request body contains `{0}`, which cannot appear in a {1} body")]
    UnembeddableBody(&'static str, &'static str),

    #[error("template assembly failed")]
    Fmt(#[from] std::fmt::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_display() {
        assert_eq!(RequestError::InvalidRequest.to_string(), "API endpoint is required");
    }

    #[test]
    fn transport_error_is_transparent() {
        let err: ExecutionError = TransportError::ConnectionFailed("refused".to_owned()).into();
        assert_eq!(err.to_string(), "connection failed: refused");
    }

    #[test]
    fn invalid_url_display() {
        let err = TransportError::InvalidUrl {
            url: "nope".to_owned(),
            reason: "relative URL without a base".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid URL `nope`: relative URL without a base");
    }

    #[test]
    fn generation_error_display() {
        assert_eq!(GenerationError::MissingEndpoint.to_string(), "API endpoint is required");
        assert_eq!(
            GenerationError::from(std::fmt::Error).to_string(),
            "template assembly failed"
        );
        assert_eq!(
            GenerationError::UnembeddableBody("\"\"\"", "Karate").to_string(),
            "request body contains `\"\"\"`, which cannot appear in a Karate body"
        );
    }
}
