use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::site::application::ports::outgoing::{Clock, SiteWriter, SiteWriterError};
use crate::site::application::use_cases::render_page::{
    GalleryQuery, HomeQuery, RenderPageUseCase, RenderedPage,
};

/// Clock frozen on one year.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

#[derive(Debug, Default)]
struct Recorded {
    written: BTreeMap<String, String>,
    copied: Vec<PathBuf>,
}

/// In-memory `SiteWriter`. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingWriter {
    record: Arc<Mutex<Recorded>>,
    fail: bool,
}

impl RecordingWriter {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn written(&self) -> BTreeMap<String, String> {
        self.record.lock().unwrap().written.clone()
    }

    pub fn copied(&self) -> Vec<PathBuf> {
        self.record.lock().unwrap().copied.clone()
    }

    fn store(&self, key: &str, bytes: &[u8]) -> Result<(), SiteWriterError> {
        if self.fail {
            return Err(SiteWriterError::WriteFailed {
                path: key.to_string(),
                message: "disk full".to_string(),
            });
        }
        self.record
            .lock()
            .unwrap()
            .written
            .insert(key.to_string(), String::from_utf8_lossy(bytes).into_owned());
        Ok(())
    }
}

#[async_trait]
impl SiteWriter for RecordingWriter {
    async fn write_page(&self, route: &str, html: &str) -> Result<(), SiteWriterError> {
        self.store(route, html.as_bytes())
    }

    async fn write_file(&self, relative: &str, bytes: &[u8]) -> Result<(), SiteWriterError> {
        self.store(relative, bytes)
    }

    async fn copy_tree(&self, from: &Path) -> Result<usize, SiteWriterError> {
        self.record.lock().unwrap().copied.push(from.to_path_buf());
        Ok(0)
    }
}

/// Renderer returning the page kind as its body; used to check routing.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubRenderPage;

impl RenderPageUseCase for StubRenderPage {
    fn render_home(&self, _: &HomeQuery) -> RenderedPage {
        RenderedPage {
            html: "home".to_string(),
        }
    }

    fn render_gallery(&self, _: &GalleryQuery) -> RenderedPage {
        RenderedPage {
            html: "gallery".to_string(),
        }
    }

    fn render_not_found(&self) -> RenderedPage {
        RenderedPage {
            html: "not found".to_string(),
        }
    }
}
