//! Error types for the simple HTTP client.
//!
//! Two families exist: invalid-argument errors raised synchronously before
//! any network action, and transport/IO failures surfaced from the engine or
//! the filesystem after resources have been released.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or executing an HTTP exchange.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// A required argument was absent or malformed. Raised before any I/O.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the offending argument.
        message: String,
    },

    /// The request URI could not be parsed as a URL. Raised before any I/O.
    #[error("invalid URI: {uri}")]
    InvalidUri {
        /// The URI string that failed to parse.
        uri: String,
    },

    /// Network-level failure from the engine (DNS, connection refused, TLS,
    /// malformed response, etc.)
    #[error("network error for {uri}: {source}")]
    Network {
        /// The URI of the failed exchange.
        uri: String,
        /// The underlying engine error.
        #[source]
        source: reqwest::Error,
    },

    /// The exchange timed out before completion.
    #[error("timeout for {uri}")]
    Timeout {
        /// The URI of the exchange that timed out.
        uri: String,
    },

    /// Filesystem error reading an upload source or writing a download
    /// destination.
    #[error("IO error for {path}: {source}")]
    Io {
        /// The file path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl HttpClientError {
    /// Creates an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates an invalid-URI error.
    pub fn invalid_uri(uri: impl Into<String>) -> Self {
        Self::InvalidUri { uri: uri.into() }
    }

    /// Creates a network error from an engine error, splitting timeouts into
    /// their own variant.
    pub fn from_engine(uri: impl Into<String>, source: reqwest::Error) -> Self {
        let uri = uri.into();
        if source.is_timeout() {
            Self::Timeout { uri }
        } else {
            Self::Network { uri, source }
        }
    }

    /// Creates an IO error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// No blanket `From<reqwest::Error>` / `From<std::io::Error>` impls: every
// variant needs context (uri, path) the source errors do not carry, so the
// helper constructors are the conversion points.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_argument_display() {
        let error = HttpClientError::invalid_argument("request.uri cannot be empty");
        let msg = error.to_string();
        assert!(msg.contains("invalid argument"), "got: {msg}");
        assert!(msg.contains("request.uri cannot be empty"), "got: {msg}");
    }

    #[test]
    fn test_invalid_uri_display() {
        let error = HttpClientError::invalid_uri("not a uri");
        let msg = error.to_string();
        assert!(msg.contains("invalid URI"), "got: {msg}");
        assert!(msg.contains("not a uri"), "got: {msg}");
    }

    #[test]
    fn test_timeout_display() {
        let error = HttpClientError::Timeout {
            uri: "https://example.com/slow".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("timeout"), "got: {msg}");
        assert!(msg.contains("https://example.com/slow"), "got: {msg}");
    }

    #[test]
    fn test_io_display_and_source_preserved() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error = HttpClientError::io(PathBuf::from("/tmp/out.bin"), io_error);
        let msg = error.to_string();
        assert!(msg.contains("/tmp/out.bin"), "got: {msg}");
        assert!(error.source().is_some(), "IO source must be preserved");
    }
}
