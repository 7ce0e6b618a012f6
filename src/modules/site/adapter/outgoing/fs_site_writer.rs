use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;
use walkdir::WalkDir;

use crate::site::application::ports::outgoing::{SiteWriter, SiteWriterError};

/// Writes an export into a directory using the trailing-slash layout:
/// `/` becomes `index.html`, `/gallery/` becomes `gallery/index.html`.
#[derive(Debug, Clone)]
pub struct FsSiteWriter {
    root: PathBuf,
}

impl FsSiteWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, relative: &str) -> Result<PathBuf, SiteWriterError> {
        let relative = Path::new(relative.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(SiteWriterError::WriteFailed {
                path: relative.display().to_string(),
                message: "path escapes the export root".to_string(),
            });
        }
        Ok(self.root.join(relative))
    }

    async fn write(&self, target: PathBuf, bytes: &[u8]) -> Result<(), SiteWriterError> {
        let failed = |e: std::io::Error| SiteWriterError::WriteFailed {
            path: target.display().to_string(),
            message: e.to_string(),
        };

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(failed)?;
        }
        tokio::fs::write(&target, bytes).await.map_err(failed)?;

        debug!(path = %target.display(), bytes = bytes.len(), "export file written");
        Ok(())
    }
}

/// File a route is written to, relative to the export root.
pub fn page_file(route: &str) -> String {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        "index.html".to_string()
    } else {
        format!("{trimmed}/index.html")
    }
}

#[async_trait]
impl SiteWriter for FsSiteWriter {
    async fn write_page(&self, route: &str, html: &str) -> Result<(), SiteWriterError> {
        let target = self.resolve(&page_file(route))?;
        self.write(target, html.as_bytes()).await
    }

    async fn write_file(&self, relative: &str, bytes: &[u8]) -> Result<(), SiteWriterError> {
        let target = self.resolve(relative)?;
        self.write(target, bytes).await
    }

    async fn copy_tree(&self, from: &Path) -> Result<usize, SiteWriterError> {
        let mut copied = 0;

        for entry in WalkDir::new(from).follow_links(false) {
            let entry = entry.map_err(|e| SiteWriterError::CopyFailed {
                path: from.display().to_string(),
                message: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(from)
                .map_err(|e| SiteWriterError::CopyFailed {
                    path: entry.path().display().to_string(),
                    message: e.to_string(),
                })?;
            let target = self.root.join(relative);
            let copy_failed = |e: std::io::Error| SiteWriterError::CopyFailed {
                path: entry.path().display().to_string(),
                message: e.to_string(),
            };

            if let Some(parent) = target.parent() {
                tokio::fs::create_dir_all(parent).await.map_err(copy_failed)?;
            }
            tokio::fs::copy(entry.path(), &target).await.map_err(copy_failed)?;
            copied += 1;
        }

        debug!(from = %from.display(), copied, "public directory copied");
        Ok(copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_index_files() {
        assert_eq!(page_file("/"), "index.html");
        assert_eq!(page_file("/gallery/"), "gallery/index.html");
        assert_eq!(page_file("/gallery"), "gallery/index.html");
    }

    #[tokio::test]
    async fn write_page_creates_nested_index() {
        let out = tempfile::tempdir().unwrap();
        let writer = FsSiteWriter::new(out.path());

        writer.write_page("/gallery/", "<p>g</p>").await.unwrap();

        let written = std::fs::read_to_string(out.path().join("gallery/index.html")).unwrap();
        assert_eq!(written, "<p>g</p>");
    }

    #[tokio::test]
    async fn write_file_rejects_parent_components() {
        let out = tempfile::tempdir().unwrap();
        let writer = FsSiteWriter::new(out.path());

        let result = writer.write_file("../escape.txt", b"x").await;

        assert!(matches!(result, Err(SiteWriterError::WriteFailed { .. })));
    }

    #[tokio::test]
    async fn copy_tree_mirrors_files() {
        let public = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(public.path().join("images/gallery")).unwrap();
        std::fs::write(public.path().join("resume.pdf"), b"pdf").unwrap();
        std::fs::write(public.path().join("images/gallery/a.jpg"), b"jpg").unwrap();
        let out = tempfile::tempdir().unwrap();
        let writer = FsSiteWriter::new(out.path());

        let copied = writer.copy_tree(public.path()).await.unwrap();

        assert_eq!(copied, 2);
        assert_eq!(std::fs::read(out.path().join("images/gallery/a.jpg")).unwrap(), b"jpg");
    }
}
