use std::path::Path;

use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SiteWriterError {
    #[error("Write failed for {path}: {message}")]
    WriteFailed { path: String, message: String },

    #[error("Copy failed for {path}: {message}")]
    CopyFailed { path: String, message: String },
}

/// Destination of a static export.
#[async_trait]
pub trait SiteWriter: Send + Sync {
    /// Writes a rendered page for a route such as `/` or `/gallery/`.
    async fn write_page(&self, route: &str, html: &str) -> Result<(), SiteWriterError>;

    /// Writes a generated file at a path relative to the export root.
    async fn write_file(&self, relative: &str, bytes: &[u8]) -> Result<(), SiteWriterError>;

    /// Copies a directory tree into the export root; returns files copied.
    async fn copy_tree(&self, from: &Path) -> Result<usize, SiteWriterError>;
}
