pub mod json_file_content_source;

pub use json_file_content_source::JsonFileContentSource;
