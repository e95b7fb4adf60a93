//! Error types for the Yelp client.

use derive_more::{Display, Error, From};

/// Main error type for Yelp client operations.
///
/// Remote application-level complaints (bad search parameters, unknown
/// neighborhoods) are NOT errors at this layer: the service reports them as
/// ordinary JSON bodies, which are decoded and returned like any success
/// response. Only configuration, transport, and decode failures surface here.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Invalid client configuration (e.g. an empty client key).
    #[display("invalid configuration: {_0}")]
    #[from(skip)]
    Config(#[error(not(source))] String),

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// The request could not be assembled.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// The response body is not valid JSON.
    #[display("JSON decode error at '{path}': {message}")]
    #[from(skip)]
    Decode {
        /// JSON path to the error (e.g., "businesses.0.name").
        path: String,
        /// Error message.
        message: String,
    },
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a decode error with path context.
    #[must_use]
    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns `true` if the response body failed to decode as JSON.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::config("client key must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid configuration: client key must not be empty"
        );

        let err = Error::Timeout;
        assert_eq!(err.to_string(), "request timeout");

        let err = Error::connection("failed to connect");
        assert_eq!(err.to_string(), "connection error: failed to connect");

        let err = Error::decode("businesses.0.name", "invalid type: null");
        assert_eq!(
            err.to_string(),
            "JSON decode error at 'businesses.0.name': invalid type: null"
        );
    }

    #[test]
    fn error_predicates() {
        assert!(Error::Timeout.is_timeout());
        assert!(!Error::connection("failed").is_timeout());

        assert!(Error::connection("failed").is_connection());
        assert!(!Error::Timeout.is_connection());

        assert!(Error::config("missing key").is_config());
        assert!(Error::decode("", "expected value").is_decode());
        assert!(!Error::config("missing key").is_decode());
    }

    #[test]
    fn error_from_url_parse() {
        let parse_err = url::Url::parse("not a url").expect_err("should fail");
        let err = Error::from(parse_err);
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
