//! The HTTP client façade.
//!
//! [`SimpleHttpClient`] converts a [`SimpleHttpRequest`] into a native
//! reqwest request of the right verb, executes it, and converts the result
//! back into a [`SimpleHttpResponse`]. The engine owns connection pooling,
//! TLS, and redirects; this layer owns validation, header copying,
//! content-type defaulting, and deterministic resource release.
//!
//! The client is created once and reused for every call; it holds no
//! per-call state and may be shared across tasks.
//!
//! # Example
//!
//! ```no_run
//! use simple_http_client::{SimpleHttpClient, SimpleHttpRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SimpleHttpClient::new();
//! let request = SimpleHttpRequest::new("https://example.com/api")
//!     .with_header("Accept", "application/json");
//! let response = client.post(&request, Some(r#"{"key":"value"}"#)).await?;
//! println!("HTTP {}", response.status_code);
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::sync::Arc;

use futures_util::StreamExt;
use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use reqwest::{Body, Client, Method, Request, StatusCode};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument};
use url::Url;

use crate::config::SimpleHttpClientConfig;
use crate::error::HttpClientError;
use crate::model::{Header, SimpleHttpRequest, SimpleHttpResponse};
use crate::stream::{FileStreamProvider, OutputStream, StreamProvider};

/// Content type attached to body-bearing writes when the caller supplied none.
const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Thin typed façade over a shared [`reqwest::Client`].
#[derive(Clone)]
pub struct SimpleHttpClient {
    client: Client,
    provider: Arc<dyn StreamProvider>,
}

impl std::fmt::Debug for SimpleHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleHttpClient")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl Default for SimpleHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleHttpClient {
    /// Creates a client with engine-default timeouts.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self::with_config(&SimpleHttpClientConfig::default())
    }

    /// Creates a client with the given timeout configuration.
    ///
    /// Unset fields leave the engine defaults in place.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// timeout configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_config(config: &SimpleHttpClientConfig) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = config.connection_request_timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = config.socket_timeout() {
            builder = builder.read_timeout(timeout);
        }
        let client = builder
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self {
            client,
            provider: Arc::new(FileStreamProvider),
        }
    }

    /// Replaces the stream provider used by [`get_file`](Self::get_file).
    ///
    /// Production code never needs this; tests substitute recording or
    /// failing sinks through it.
    #[must_use]
    pub fn with_stream_provider(mut self, provider: Arc<dyn StreamProvider>) -> Self {
        self.provider = provider;
        self
    }

    /// Returns a reference to the underlying reqwest client.
    ///
    /// This can be used for advanced operations not covered by this façade.
    #[must_use]
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Issues a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError::InvalidArgument`] or
    /// [`HttpClientError::InvalidUri`] before any network action, and
    /// transport errors from the engine otherwise.
    #[instrument(level = "debug", skip(self, request), fields(uri = %request.uri))]
    pub async fn get(
        &self,
        request: &SimpleHttpRequest,
    ) -> Result<SimpleHttpResponse, HttpClientError> {
        let native = self.build_request(Method::GET, request, None)?;
        self.execute(native).await
    }

    /// Issues a POST request with an optional text body.
    ///
    /// A `None` body attaches no entity. When a body is present and the
    /// caller did not supply a `Content-Type` header, `application/json` is
    /// used.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`get`](Self::get).
    #[instrument(level = "debug", skip(self, request, body), fields(uri = %request.uri))]
    pub async fn post(
        &self,
        request: &SimpleHttpRequest,
        body: Option<&str>,
    ) -> Result<SimpleHttpResponse, HttpClientError> {
        let native = self.build_request(Method::POST, request, body)?;
        self.execute(native).await
    }

    /// Issues a PUT request with an optional text body.
    ///
    /// Body and content-type handling match [`post`](Self::post).
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`get`](Self::get).
    #[instrument(level = "debug", skip(self, request, body), fields(uri = %request.uri))]
    pub async fn put(
        &self,
        request: &SimpleHttpRequest,
        body: Option<&str>,
    ) -> Result<SimpleHttpResponse, HttpClientError> {
        let native = self.build_request(Method::PUT, request, body)?;
        self.execute(native).await
    }

    /// Issues a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`get`](Self::get).
    #[instrument(level = "debug", skip(self, request), fields(uri = %request.uri))]
    pub async fn delete(
        &self,
        request: &SimpleHttpRequest,
    ) -> Result<SimpleHttpResponse, HttpClientError> {
        let native = self.build_request(Method::DELETE, request, None)?;
        self.execute(native).await
    }

    /// Issues a PUT request whose body is the contents of `source`.
    ///
    /// The file is read before any network action; no content type is
    /// attached beyond what the caller's headers carry.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError::InvalidArgument`] for an empty source path,
    /// [`HttpClientError::Io`] if the file cannot be read, and the same
    /// errors as [`get`](Self::get) otherwise.
    #[instrument(level = "debug", skip(self, request), fields(uri = %request.uri, source = %source.display()))]
    pub async fn put_file(
        &self,
        request: &SimpleHttpRequest,
        source: &Path,
    ) -> Result<SimpleHttpResponse, HttpClientError> {
        validate_request(request)?;
        validate_path(source, "source file path cannot be empty")?;
        let mut native = self.build_request(Method::PUT, request, None)?;
        let bytes = tokio::fs::read(source)
            .await
            .map_err(|e| HttpClientError::io(source.to_path_buf(), e))?;
        debug!(bytes = bytes.len(), "attaching file body");
        *native.body_mut() = Some(Body::from(bytes));
        self.execute(native).await
    }

    /// Issues a GET request and streams the response body to `destination`.
    ///
    /// The body is never buffered as text; the returned response has
    /// `content: None`. The output stream is shut down exactly once on every
    /// exit path, and a failure while reading the body outranks a failure
    /// while shutting the stream down.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError::InvalidArgument`] for an empty destination
    /// path, [`HttpClientError::Io`] for stream open/write failures, and the
    /// same errors as [`get`](Self::get) otherwise.
    #[instrument(level = "debug", skip(self, request), fields(uri = %request.uri, destination = %destination.display()))]
    pub async fn get_file(
        &self,
        request: &SimpleHttpRequest,
        destination: &Path,
    ) -> Result<SimpleHttpResponse, HttpClientError> {
        validate_request(request)?;
        validate_path(destination, "destination file path cannot be empty")?;
        let native = self.build_request(Method::GET, request, None)?;
        let mut output = self.provider.open_output_stream(destination).await?;

        let response = self.stream_to_output(native, &mut output, destination).await?;

        info!(status = response.status_code, "download complete");
        Ok(response)
    }

    /// Executes a prebuilt native request and buffers the response body.
    ///
    /// An empty body yields `content: None`, never `Some("")`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError::Network`] or [`HttpClientError::Timeout`]
    /// when the engine fails.
    #[instrument(level = "debug", skip(self, native), fields(method = %native.method(), uri = %native.url()))]
    pub async fn execute(
        &self,
        native: Request,
    ) -> Result<SimpleHttpResponse, HttpClientError> {
        let uri = native.url().to_string();
        let response = self
            .client
            .execute(native)
            .await
            .map_err(|e| HttpClientError::from_engine(uri.as_str(), e))?;

        let status_code = response.status().as_u16();
        let status_reason = reason_phrase(response.status());
        let headers = convert_headers(response.headers());
        let bytes = response
            .bytes()
            .await
            .map_err(|e| HttpClientError::from_engine(uri.as_str(), e))?;
        let content =
            (!bytes.is_empty()).then(|| String::from_utf8_lossy(&bytes).into_owned());

        Ok(SimpleHttpResponse {
            status_code,
            status_reason,
            content,
            headers,
        })
    }

    /// Executes the exchange and writes the body to `output` chunk by chunk.
    ///
    /// The output stream is shut down exactly once on every exit path, while
    /// the exchange is still open; the exchange is released right after, and
    /// a copy failure outranks a shutdown failure.
    async fn stream_to_output(
        &self,
        native: Request,
        output: &mut OutputStream,
        destination: &Path,
    ) -> Result<SimpleHttpResponse, HttpClientError> {
        let uri = native.url().to_string();
        let response = match self.client.execute(native).await {
            Ok(response) => response,
            Err(e) => {
                let original = HttpClientError::from_engine(uri.as_str(), e);
                let _ = output.shutdown().await;
                return Err(original);
            }
        };

        let status_code = response.status().as_u16();
        let status_reason = reason_phrase(response.status());
        let headers = convert_headers(response.headers());

        let mut body = response.bytes_stream();
        let mut bytes_written: u64 = 0;
        let mut copied: Result<(), HttpClientError> = Ok(());
        while let Some(chunk) = body.next().await {
            match chunk {
                Ok(chunk) => {
                    if let Err(e) = output.write_all(&chunk).await {
                        copied = Err(HttpClientError::io(destination.to_path_buf(), e));
                        break;
                    }
                    bytes_written += chunk.len() as u64;
                }
                Err(e) => {
                    copied = Err(HttpClientError::from_engine(uri.as_str(), e));
                    break;
                }
            }
        }
        if copied.is_ok() {
            copied = output
                .flush()
                .await
                .map_err(|e| HttpClientError::io(destination.to_path_buf(), e));
        }

        // Close the output stream, then release the exchange, then re-raise
        // the copy failure if there was one.
        let shutdown = output.shutdown().await;
        drop(body);
        copied?;
        shutdown.map_err(|e| HttpClientError::io(destination.to_path_buf(), e))?;
        debug!(bytes = bytes_written, "streamed response body to destination");

        Ok(SimpleHttpResponse {
            status_code,
            status_reason,
            content: None,
            headers,
        })
    }

    /// Builds a native request: validation, URL parse, header copy, and for
    /// body-bearing writes the content-type default.
    fn build_request(
        &self,
        method: Method,
        request: &SimpleHttpRequest,
        body: Option<&str>,
    ) -> Result<Request, HttpClientError> {
        validate_request(request)?;
        let url =
            Url::parse(&request.uri).map_err(|_| HttpClientError::invalid_uri(&request.uri))?;
        let mut native = Request::new(method, url);
        copy_headers(request, &mut native)?;
        if let Some(body) = body {
            if !native.headers().contains_key(CONTENT_TYPE) {
                native
                    .headers_mut()
                    .insert(CONTENT_TYPE, HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
            }
            *native.body_mut() = Some(Body::from(body.to_owned()));
        }
        Ok(native)
    }
}

/// Rejects requests with an empty URI before any network action.
fn validate_request(request: &SimpleHttpRequest) -> Result<(), HttpClientError> {
    if request.uri.trim().is_empty() {
        return Err(HttpClientError::invalid_argument(
            "request.uri cannot be empty",
        ));
    }
    Ok(())
}

/// Rejects empty file paths before any network action.
fn validate_path(path: &Path, message: &str) -> Result<(), HttpClientError> {
    if path.as_os_str().is_empty() {
        return Err(HttpClientError::invalid_argument(message));
    }
    Ok(())
}

/// Copies every caller header onto the native request, exactly once each.
fn copy_headers(
    request: &SimpleHttpRequest,
    native: &mut Request,
) -> Result<(), HttpClientError> {
    for (name, value) in &request.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            HttpClientError::invalid_argument(format!("invalid header name: {name}"))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|_| {
            HttpClientError::invalid_argument(format!("invalid value for header {name}"))
        })?;
        native.headers_mut().append(header_name, header_value);
    }
    Ok(())
}

/// Converts engine response headers into the model's ordered header list.
fn convert_headers(headers: &reqwest::header::HeaderMap) -> Vec<Header> {
    headers
        .iter()
        .map(|(name, value)| Header::new(name.as_str(), String::from_utf8_lossy(value.as_bytes())))
        .collect()
}

fn reason_phrase(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}
