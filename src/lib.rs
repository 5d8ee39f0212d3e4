//! Simple HTTP Client Library
//!
//! This library provides a thin typed façade over [`reqwest`]: GET, POST,
//! PUT, and DELETE exchanges plus file upload and download, all expressed
//! through a small uniform request/response model.
//!
//! Connection pooling, TLS, redirects, and timeouts are the engine's
//! responsibility; this crate only builds native requests from the model,
//! copies headers, applies content-type defaulting, and consumes responses
//! with deterministic resource release.
//!
//! # Architecture
//!
//! - [`model`] - Request/response/header value types
//! - [`config`] - Optional timeout configuration passed through to the engine
//! - [`stream`] - Output stream provider for file downloads
//! - [`client`] - The [`SimpleHttpClient`] façade itself
//! - [`error`] - Structured error types
//!
//! # Example
//!
//! ```no_run
//! use simple_http_client::{SimpleHttpClient, SimpleHttpRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SimpleHttpClient::new();
//! let request = SimpleHttpRequest::new("https://example.com/resource");
//! let response = client.get(&request).await?;
//! println!("HTTP {} {}", response.status_code, response.status_reason);
//! # Ok(())
//! # }
//! ```

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod stream;

// Re-export commonly used types
pub use client::SimpleHttpClient;
pub use config::SimpleHttpClientConfig;
pub use error::HttpClientError;
pub use model::{Header, SimpleHttpRequest, SimpleHttpResponse};
pub use stream::{FileStreamProvider, OutputStream, StreamProvider};
