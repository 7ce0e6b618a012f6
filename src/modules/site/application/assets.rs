//! Stylesheet and script compiled into the binary.

pub const SITE_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/site.css"));
pub const SITE_JS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/site.js"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedAsset {
    /// Path relative to the site root, without leading slash.
    pub path: &'static str,
    pub content_type: &'static str,
    pub body: &'static str,
}

pub static EMBEDDED: [EmbeddedAsset; 2] = [
    EmbeddedAsset {
        path: "assets/site.css",
        content_type: "text/css; charset=utf-8",
        body: SITE_CSS,
    },
    EmbeddedAsset {
        path: "assets/site.js",
        content_type: "text/javascript; charset=utf-8",
        body: SITE_JS,
    },
];

pub fn find(path: &str) -> Option<&'static EmbeddedAsset> {
    let path = path.trim_start_matches('/');
    EMBEDDED.iter().find(|asset| asset.path == path)
}
