pub mod load_content;
