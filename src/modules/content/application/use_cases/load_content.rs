use async_trait::async_trait;

use crate::content::application::content_store::ContentStore;
use crate::content::domain::policies::ContentValidationError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadContentError {
    #[error("content source error: {0}")]
    SourceError(String),

    #[error("content document is invalid ({} problem(s))", .0.len())]
    Invalid(Vec<ContentValidationError>),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoadContentUseCase: Send + Sync {
    async fn execute(&self) -> Result<ContentStore, LoadContentError>;
}
