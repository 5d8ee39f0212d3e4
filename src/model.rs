//! Request/response value types for the simple HTTP client.
//!
//! These are plain data holders: a request is built by the caller, handed to
//! the façade for one call, and discarded; a response is assembled by the
//! façade from whatever the engine returned. Neither carries identity beyond
//! its fields.

use std::collections::HashMap;

/// An outgoing HTTP request: a URI plus optional headers.
///
/// The URI is required and must be non-empty before any operation executes.
/// Header names are unique; inserting the same name twice keeps the last
/// value.
///
/// # Example
///
/// ```
/// use simple_http_client::SimpleHttpRequest;
///
/// let request = SimpleHttpRequest::new("https://example.com/api")
///     .with_header("Authorization", "Bearer token")
///     .with_header("Accept", "application/json");
/// assert_eq!(request.uri, "https://example.com/api");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleHttpRequest {
    /// Target URI. Must be non-empty and parseable as a URL.
    pub uri: String,
    /// Headers to copy verbatim onto the native request. May be empty.
    pub headers: HashMap<String, String>,
}

impl SimpleHttpRequest {
    /// Creates a request for the given URI with no headers.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            headers: HashMap::new(),
        }
    }

    /// Adds a header, replacing any existing value under the same name.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// A single response header, in the order the engine reported it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Header name as received.
    pub name: String,
    /// Header value as received.
    pub value: String,
}

impl Header {
    /// Creates a header pair.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The result of a completed HTTP exchange.
///
/// `content` is `None` when the response carried no entity, and always `None`
/// for downloads that streamed the body to a file instead of buffering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleHttpResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// Status reason phrase (empty when the engine has none to report).
    pub status_reason: String,
    /// Buffered text body; `None` when no entity was present or the body was
    /// streamed to a file.
    pub content: Option<String>,
    /// All response headers, in received order.
    pub headers: Vec<Header>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_with_header_last_write_wins() {
        let request = SimpleHttpRequest::new("https://example.com")
            .with_header("Accept", "text/plain")
            .with_header("Accept", "application/json");

        assert_eq!(request.headers.len(), 1);
        assert_eq!(
            request.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_request_default_has_no_headers() {
        let request = SimpleHttpRequest::default();
        assert!(request.uri.is_empty());
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_response_equality_by_fields() {
        let a = SimpleHttpResponse {
            status_code: 200,
            status_reason: "OK".to_string(),
            content: Some("body".to_string()),
            headers: vec![Header::new("Content-Type", "text/plain")],
        };
        let b = a.clone();
        assert_eq!(a, b);

        let mut c = b.clone();
        c.content = None;
        assert_ne!(a, c);
    }
}
