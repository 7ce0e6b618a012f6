pub mod export_site;
pub mod render_page;
