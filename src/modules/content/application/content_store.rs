use std::ops::Deref;
use std::sync::Arc;

use crate::content::domain::entities::{GalleryPhoto, PhotoId, PortfolioContent, Project, ProjectId};

/// Immutable, load-once view of the content document. Cloning is cheap and
/// every clone reads the same document.
#[derive(Debug, Clone)]
pub struct ContentStore {
    inner: Arc<PortfolioContent>,
}

impl ContentStore {
    pub fn new(content: PortfolioContent) -> Self {
        Self {
            inner: Arc::new(content),
        }
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.inner.projects.iter().find(|p| p.id == id)
    }

    pub fn photo(&self, id: PhotoId) -> Option<&GalleryPhoto> {
        self.inner.gallery.iter().find(|p| p.id == id)
    }

    pub fn summary(&self) -> ContentSummary {
        ContentSummary {
            navigation: self.inner.navigation.len(),
            experience: self.inner.experience.len(),
            projects: self.inner.projects.len(),
            photos: self.inner.gallery.len(),
        }
    }
}

impl Deref for ContentStore {
    type Target = PortfolioContent;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ContentSummary {
    pub navigation: usize,
    pub experience: usize,
    pub projects: usize,
    pub photos: usize,
}
