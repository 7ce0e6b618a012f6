use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::content::application::ports::outgoing::{ContentSource, ContentSourceError};
use crate::content::domain::entities::PortfolioContent;

/// Reads the content document from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileContentSource {
    path: PathBuf,
}

impl JsonFileContentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for JsonFileContentSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<PortfolioContent, ContentSourceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ContentSourceError::Unreadable(format!("{}: {e}", self.path.display())))?;

        debug!(bytes = raw.len(), path = %self.path.display(), "content document read");

        serde_json::from_str(&raw).map_err(|e| {
            ContentSourceError::Malformed(format!(
                "{} (line {}, column {}): {e}",
                self.path.display(),
                e.line(),
                e.column()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r##"{
        "personal": {
            "name": "Ada Lovelace",
            "title": "Engineer",
            "tagline": "t",
            "bio": "b",
            "location": "London",
            "email": "ada@example.com",
            "resumeUrl": "/resume.pdf"
        },
        "navigation": [{ "name": "About", "href": "#about" }]
    }"##;

    #[tokio::test]
    async fn fetch_parses_document_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let source = JsonFileContentSource::new(file.path());
        let content = source.fetch().await.unwrap();

        assert_eq!(content.personal.name, "Ada Lovelace");
        assert_eq!(content.navigation.len(), 1);
    }

    #[tokio::test]
    async fn fetch_reports_missing_file_as_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileContentSource::new(dir.path().join("missing.json"));

        let result = source.fetch().await;

        assert!(matches!(result, Err(ContentSourceError::Unreadable(_))));
    }

    #[tokio::test]
    async fn fetch_reports_bad_json_with_position() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ \"personal\": ").unwrap();

        let source = JsonFileContentSource::new(file.path());
        let result = source.fetch().await;

        match result {
            Err(ContentSourceError::Malformed(msg)) => assert!(msg.contains("line 1")),
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_rejects_document_without_personal_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "projects": [] }"#).unwrap();

        let source = JsonFileContentSource::new(file.path());

        assert!(matches!(
            source.fetch().await,
            Err(ContentSourceError::Malformed(_))
        ));
    }

    #[test]
    fn describe_is_the_file_path() {
        let source = JsonFileContentSource::new("data/portfolio.json");
        assert_eq!(source.describe(), "data/portfolio.json");
    }
}
