use async_trait::async_trait;
use tracing::{info, warn};

use crate::content::application::content_store::ContentStore;
use crate::content::application::ports::outgoing::{ContentSource, ContentSourceError};
use crate::content::application::use_cases::load_content::{LoadContentError, LoadContentUseCase};
use crate::content::domain::policies::ContentPolicy;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct LoadContentService<S, P>
where
    S: ContentSource,
    P: ContentPolicy,
{
    source: S,
    policy: P,
}

impl<S, P> LoadContentService<S, P>
where
    S: ContentSource,
    P: ContentPolicy,
{
    pub fn new(source: S, policy: P) -> Self {
        Self { source, policy }
    }
}

#[async_trait]
impl<S, P> LoadContentUseCase for LoadContentService<S, P>
where
    S: ContentSource + Send + Sync,
    P: ContentPolicy + Send + Sync,
{
    async fn execute(&self) -> Result<ContentStore, LoadContentError> {
        let origin = self.source.describe();

        let content = self.source.fetch().await.map_err(|e| match e {
            ContentSourceError::Unreadable(msg) => LoadContentError::SourceError(msg),
            ContentSourceError::Malformed(msg) => LoadContentError::SourceError(msg),
        })?;

        if let Err(problems) = self.policy.validate(&content) {
            for problem in &problems {
                warn!(source = %origin, "content problem: {}", problem);
            }
            return Err(LoadContentError::Invalid(problems));
        }

        let store = ContentStore::new(content);
        let summary = store.summary();
        info!(
            source = %origin,
            projects = summary.projects,
            experience = summary.experience,
            photos = summary.photos,
            "content loaded"
        );

        Ok(store)
    }
}

//
// ──────────────────────────────────────────────────────────
// Unit tests (service only)
// ──────────────────────────────────────────────────────────
//
