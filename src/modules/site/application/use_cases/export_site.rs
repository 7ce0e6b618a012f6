use async_trait::async_trait;
use serde::Serialize;

use crate::site::application::ports::outgoing::SiteWriterError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportSiteError {
    #[error("export write failed: {0}")]
    Write(#[from] SiteWriterError),
}

/// What a static export produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub pages: usize,
    pub assets: usize,
    pub public_files: usize,
}

#[async_trait]
pub trait ExportSiteUseCase: Send + Sync {
    /// Writes every page in its initial interaction state plus the
    /// embedded assets and the public directory.
    async fn execute(&self) -> Result<ExportReport, ExportSiteError>;
}
