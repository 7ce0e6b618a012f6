use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::site::application::assets::EMBEDDED;
use crate::site::application::ports::outgoing::SiteWriter;
use crate::site::application::use_cases::export_site::{
    ExportReport, ExportSiteError, ExportSiteUseCase,
};
use crate::site::application::use_cases::render_page::{GalleryQuery, HomeQuery, RenderPageUseCase};
use crate::site::domain::view_context::View;

pub struct ExportSiteService<R, W>
where
    R: RenderPageUseCase,
    W: SiteWriter,
{
    renderer: R,
    writer: W,
    public_dir: Option<PathBuf>,
}

impl<R, W> ExportSiteService<R, W>
where
    R: RenderPageUseCase,
    W: SiteWriter,
{
    pub fn new(renderer: R, writer: W, public_dir: Option<PathBuf>) -> Self {
        Self {
            renderer,
            writer,
            public_dir,
        }
    }
}

#[async_trait]
impl<R, W> ExportSiteUseCase for ExportSiteService<R, W>
where
    R: RenderPageUseCase,
    W: SiteWriter,
{
    async fn execute(&self) -> Result<ExportReport, ExportSiteError> {
        let mut report = ExportReport::default();

        let home = self.renderer.render_home(&HomeQuery::default());
        self.writer.write_page(View::Home.path(), &home.html).await?;
        report.pages += 1;

        let gallery = self.renderer.render_gallery(&GalleryQuery::default());
        self.writer.write_page(View::Gallery.path(), &gallery.html).await?;
        report.pages += 1;

        let not_found = self.renderer.render_not_found();
        self.writer.write_file("404.html", not_found.html.as_bytes()).await?;
        report.pages += 1;

        for asset in EMBEDDED.iter() {
            self.writer.write_file(asset.path, asset.body.as_bytes()).await?;
            report.assets += 1;
        }

        match &self.public_dir {
            Some(dir) if dir.is_dir() => {
                report.public_files = self.writer.copy_tree(dir).await?;
            }
            Some(dir) => warn!(dir = %dir.display(), "public directory missing, skipping copy"),
            None => {}
        }

        info!(
            pages = report.pages,
            assets = report.assets,
            public_files = report.public_files,
            "static export complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::application::ports::outgoing::SiteWriterError;
    use crate::tests::support::stubs::{RecordingWriter, StubRenderPage};
    use std::path::Path;

    // ===== Success =====

    #[tokio::test]
    async fn writes_pages_and_assets_at_trailing_slash_routes() {
        let writer = RecordingWriter::default();
        let service = ExportSiteService::new(StubRenderPage, writer.clone(), None);

        let report = service.execute().await.unwrap();

        assert_eq!(report, ExportReport { pages: 3, assets: 2, public_files: 0 });
        let written = writer.written();
        assert_eq!(written.get("/").map(String::as_str), Some("home"));
        assert_eq!(written.get("/gallery/").map(String::as_str), Some("gallery"));
        assert_eq!(written.get("404.html").map(String::as_str), Some("not found"));
        assert!(written.contains_key("assets/site.css"));
        assert!(written.contains_key("assets/site.js"));
    }

    #[tokio::test]
    async fn copies_public_directory_when_present() {
        let public = tempfile::tempdir().unwrap();
        let writer = RecordingWriter::default();
        let service = ExportSiteService::new(
            StubRenderPage,
            writer.clone(),
            Some(public.path().to_path_buf()),
        );

        service.execute().await.unwrap();

        assert_eq!(writer.copied(), vec![public.path().to_path_buf()]);
    }

    #[tokio::test]
    async fn missing_public_directory_is_skipped() {
        let writer = RecordingWriter::default();
        let service = ExportSiteService::new(
            StubRenderPage,
            writer.clone(),
            Some(Path::new("/definitely/not/here").to_path_buf()),
        );

        let report = service.execute().await.unwrap();

        assert_eq!(report.public_files, 0);
        assert!(writer.copied().is_empty());
    }

    // ===== Errors =====

    #[tokio::test]
    async fn write_failure_aborts_export() {
        let writer = RecordingWriter::failing();
        let service = ExportSiteService::new(StubRenderPage, writer, None);

        let result = service.execute().await;

        assert!(matches!(
            result,
            Err(ExportSiteError::Write(SiteWriterError::WriteFailed { .. }))
        ));
    }
}
