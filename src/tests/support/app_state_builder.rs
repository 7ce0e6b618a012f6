use std::path::PathBuf;
use std::sync::Arc;

use crate::content::application::content_store::ContentStore;
use crate::content::domain::entities::PortfolioContent;
use crate::site::application::services::RenderPageService;
use crate::site::application::use_cases::render_page::RenderPageUseCase;
use crate::site::domain::view_context::BasePath;
use crate::tests::support::content_fixtures::sample_content;
use crate::tests::support::stubs::FixedClock;
use crate::AppState;

pub const TEST_YEAR: i32 = 2030;

pub struct TestAppStateBuilder {
    content: PortfolioContent,
    base_path: BasePath,
    public_dir: PathBuf,
    render_page: Option<Arc<dyn RenderPageUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            content: sample_content(),
            base_path: BasePath::root(),
            public_dir: PathBuf::from("public"),
            render_page: None,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_content(mut self, content: PortfolioContent) -> Self {
        self.content = content;
        self
    }

    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_path = BasePath::new(base_path);
        self
    }

    pub fn with_public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.public_dir = dir.into();
        self
    }

    pub fn with_render_page(mut self, uc: Arc<dyn RenderPageUseCase + Send + Sync>) -> Self {
        self.render_page = Some(uc);
        self
    }

    pub fn build(self) -> AppState {
        let content = ContentStore::new(self.content);
        let render_page_use_case = self.render_page.unwrap_or_else(|| {
            Arc::new(RenderPageService::new(
                content.clone(),
                self.base_path.clone(),
                FixedClock(TEST_YEAR),
            ))
        });

        AppState {
            render_page_use_case,
            content,
            public_dir: self.public_dir,
            base_path: self.base_path,
        }
    }
}
