mod get_gallery;
mod get_home;
mod get_public_file;
mod get_site_asset;

pub use get_gallery::get_gallery_handler;
pub use get_home::{get_home_handler, redirect_to_home_handler};
pub use get_public_file::public_file_handler;
pub use get_site_asset::get_site_asset_handler;
