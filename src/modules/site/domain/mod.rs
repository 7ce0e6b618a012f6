pub mod animation;
pub mod interaction;
pub mod navigation;
pub mod view_context;
