pub mod export_site_service;
pub mod render_page_service;

pub use export_site_service::ExportSiteService;
pub use render_page_service::RenderPageService;
