pub mod load_content_service;

pub use load_content_service::LoadContentService;
