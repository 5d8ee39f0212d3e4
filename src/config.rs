//! Timeout configuration passed through to the HTTP engine at construction.

use std::time::Duration;

/// Optional timeouts for the underlying engine, all in milliseconds.
///
/// Any field left as `None` keeps the engine default. The mapping onto
/// reqwest is:
///
/// - `connect_timeout_ms` → connect timeout
/// - `socket_timeout_ms` → read timeout between body chunks
/// - `connection_request_timeout_ms` → total-exchange deadline (reqwest has
///   no separate pool-checkout timeout, so this bounds the whole call)
///
/// # Example
///
/// ```
/// use simple_http_client::SimpleHttpClientConfig;
///
/// let config = SimpleHttpClientConfig {
///     connect_timeout_ms: Some(5_000),
///     socket_timeout_ms: Some(30_000),
///     ..SimpleHttpClientConfig::default()
/// };
/// assert!(config.connection_request_timeout_ms.is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleHttpClientConfig {
    /// Deadline for the entire exchange, in milliseconds.
    pub connection_request_timeout_ms: Option<u64>,
    /// Connect timeout, in milliseconds.
    pub connect_timeout_ms: Option<u64>,
    /// Socket read timeout, in milliseconds.
    pub socket_timeout_ms: Option<u64>,
}

impl SimpleHttpClientConfig {
    /// Returns the total-exchange deadline as a [`Duration`], if configured.
    #[must_use]
    pub fn connection_request_timeout(&self) -> Option<Duration> {
        self.connection_request_timeout_ms.map(Duration::from_millis)
    }

    /// Returns the connect timeout as a [`Duration`], if configured.
    #[must_use]
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }

    /// Returns the socket read timeout as a [`Duration`], if configured.
    #[must_use]
    pub fn socket_timeout(&self) -> Option<Duration> {
        self.socket_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_leaves_engine_defaults() {
        let config = SimpleHttpClientConfig::default();
        assert!(config.connection_request_timeout().is_none());
        assert!(config.connect_timeout().is_none());
        assert!(config.socket_timeout().is_none());
    }

    #[test]
    fn test_timeouts_convert_to_durations() {
        let config = SimpleHttpClientConfig {
            connection_request_timeout_ms: Some(1_500),
            connect_timeout_ms: Some(250),
            socket_timeout_ms: Some(10_000),
        };
        assert_eq!(
            config.connection_request_timeout(),
            Some(Duration::from_millis(1_500))
        );
        assert_eq!(config.connect_timeout(), Some(Duration::from_millis(250)));
        assert_eq!(config.socket_timeout(), Some(Duration::from_secs(10)));
    }
}
