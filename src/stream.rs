//! Output stream provider for file downloads.
//!
//! The façade never opens destination files directly; it asks a
//! [`StreamProvider`] for a writable sink. That is the single seam tests use
//! to observe or fail the download write path.

use std::path::Path;

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::AsyncWrite;

use crate::error::HttpClientError;

/// A writable sink for a streamed response body.
pub type OutputStream = Box<dyn AsyncWrite + Send + Unpin>;

/// Provides an open output stream for a destination file path.
///
/// Carries no other logic; it exists so tests can substitute the sink.
#[async_trait]
pub trait StreamProvider: Send + Sync {
    /// Opens a writable stream for the given destination path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError::Io`] if the destination cannot be opened.
    async fn open_output_stream(&self, path: &Path) -> Result<OutputStream, HttpClientError>;
}

/// Production provider: creates (or truncates) the destination file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStreamProvider;

#[async_trait]
impl StreamProvider for FileStreamProvider {
    async fn open_output_stream(&self, path: &Path) -> Result<OutputStream, HttpClientError> {
        let file = File::create(path)
            .await
            .map_err(|e| HttpClientError::io(path.to_path_buf(), e))?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn test_file_stream_provider_creates_writable_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        let provider = FileStreamProvider;
        let mut stream = provider.open_output_stream(&path).await.unwrap();
        stream.write_all(b"hello").await.unwrap();
        stream.shutdown().await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }

    #[tokio::test]
    async fn test_file_stream_provider_truncates_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        std::fs::write(&path, b"previous contents").unwrap();

        let provider = FileStreamProvider;
        let mut stream = provider.open_output_stream(&path).await.unwrap();
        stream.write_all(b"new").await.unwrap();
        stream.shutdown().await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn test_file_stream_provider_missing_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such-dir").join("out.txt");

        let provider = FileStreamProvider;
        let result = tokio_test::block_on(provider.open_output_stream(&path));
        assert!(matches!(result, Err(HttpClientError::Io { .. })));
    }
}
