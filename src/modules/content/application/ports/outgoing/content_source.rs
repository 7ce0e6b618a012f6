// content_source.rs
use crate::content::domain::entities::PortfolioContent;
use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentSourceError {
    #[error("Content document not readable: {0}")]
    Unreadable(String),

    #[error("Content document malformed: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Short description of where the document comes from, for logs.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<PortfolioContent, ContentSourceError>;
}
