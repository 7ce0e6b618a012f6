pub mod modules;
pub use modules::content;
pub use modules::site;
pub mod cli;
pub mod config;
pub mod health;
pub mod shared;

use crate::cli::{Args, Command};
use crate::config::SiteConfig;
use crate::content::adapter::outgoing::JsonFileContentSource;
use crate::content::application::content_store::ContentStore;
use crate::content::application::services::LoadContentService;
use crate::content::application::use_cases::load_content::LoadContentUseCase;
use crate::content::domain::policies::DefaultContentPolicy;
use crate::site::adapter::incoming::web::routes;
use crate::site::adapter::outgoing::{FsSiteWriter, SystemClock};
use crate::site::application::services::{ExportSiteService, RenderPageService};
use crate::site::application::use_cases::export_site::ExportSiteUseCase;
use crate::site::application::use_cases::render_page::RenderPageUseCase;
use crate::site::domain::view_context::{BasePath, View};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub render_page_use_case: Arc<dyn RenderPageUseCase + Send + Sync>,
    pub content: ContentStore,
    pub public_dir: PathBuf,
    pub base_path: BasePath,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let mut config = SiteConfig::from_env()?;
    if let Some(content) = &args.content {
        config.content_path = content.clone();
    }

    info!(env = config.env.as_str(), base_path = %config.base_path, "Starting application...");

    match args.command() {
        Command::Serve => serve(config).await,
        Command::Export { out } => export(config, out).await,
        Command::Check => check(config).await,
    }
}

async fn load_content(path: &Path) -> anyhow::Result<ContentStore> {
    let service = LoadContentService::new(JsonFileContentSource::new(path), DefaultContentPolicy);
    service
        .execute()
        .await
        .with_context(|| format!("loading content from {}", path.display()))
}

#[cfg(not(tarpaulin_include))]
async fn serve(config: SiteConfig) -> anyhow::Result<()> {
    let content = load_content(&config.content_path).await?;

    let render_page_use_case =
        RenderPageService::new(content.clone(), config.base_path.clone(), SystemClock);

    let state = AppState {
        render_page_use_case: Arc::new(render_page_use_case),
        content,
        public_dir: config.public_dir.clone(),
        base_path: config.base_path.clone(),
    };

    let server_url = config.bind_address();
    info!("Server run on: {}{}", server_url, config.base_path.page(View::Home));

    HttpServer::new(move || {
        let base_path = state.base_path.clone();
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(|cfg| init_routes(cfg, &base_path))
    })
    .bind(&server_url)
    .with_context(|| format!("binding {server_url}"))?
    .run()
    .await?;

    Ok(())
}

async fn export(config: SiteConfig, out: Option<PathBuf>) -> anyhow::Result<()> {
    let content = load_content(&config.content_path).await?;
    let out = out.unwrap_or_else(|| config.export_dir.clone());

    let renderer = RenderPageService::new(content, config.base_path.clone(), SystemClock);
    let writer = FsSiteWriter::new(&out);
    let service = ExportSiteService::new(renderer, writer, Some(config.public_dir.clone()));

    let report = service.execute().await?;
    info!(
        out = %out.display(),
        pages = report.pages,
        assets = report.assets,
        public_files = report.public_files,
        "Export written"
    );
    Ok(())
}

async fn check(config: SiteConfig) -> anyhow::Result<()> {
    let content = load_content(&config.content_path).await?;
    let summary = content.summary();
    info!(
        path = %config.content_path.display(),
        navigation = summary.navigation,
        experience = summary.experience,
        projects = summary.projects,
        photos = summary.photos,
        "Content document is valid"
    );
    Ok(())
}

pub(crate) fn init_routes(cfg: &mut web::ServiceConfig, base_path: &BasePath) {
    if !base_path.is_root() {
        cfg.route(
            base_path.as_str(),
            web::get().to(routes::redirect_to_home_handler),
        );
    }

    cfg.service(
        web::scope(base_path.as_str())
            // Health
            .service(crate::health::health)
            .service(crate::health::readiness)
            // Pages
            .service(routes::get_home_handler)
            .service(routes::get_gallery_handler)
            // Assets
            .service(routes::get_site_asset_handler)
            .default_service(web::to(routes::public_file_handler)),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
