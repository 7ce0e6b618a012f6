use std::fmt;

/// Section ids rendered on the home view, in page order.
pub const HOME_ANCHORS: [&str; 6] = ["home", "about", "experience", "projects", "skills", "contact"];

/// The navigable pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Gallery,
}

impl View {
    /// Canonical path, trailing slash included.
    pub fn path(self) -> &'static str {
        match self {
            View::Home => "/",
            View::Gallery => "/gallery/",
        }
    }

    pub fn anchors(self) -> &'static [&'static str] {
        match self {
            View::Home => &HOME_ANCHORS,
            View::Gallery => &[],
        }
    }

    pub fn owns_anchor(self, anchor: &str) -> bool {
        self.anchors().contains(&anchor)
    }

    /// The view an anchor lives on. Every section is part of the home view.
    pub fn anchor_owner(_anchor: &str) -> View {
        View::Home
    }
}

/// Deployment path prefix: empty in development, e.g. `/portfolio` when the
/// site is hosted under a subpath.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self(String::new())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    pub fn root() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Prefix a root-relative reference. Absolute URLs, protocol-relative
    /// URLs and fragments are returned unchanged.
    pub fn join(&self, reference: &str) -> String {
        if reference.starts_with('/') && !reference.starts_with("//") {
            format!("{}{}", self.0, reference)
        } else {
            reference.to_string()
        }
    }

    pub fn page(&self, view: View) -> String {
        self.join(view.path())
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ambient, read-only facts every unit may consult while rendering.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub view: View,
    pub base_path: BasePath,
    /// Vertical scroll offset in pixels at render time.
    pub scroll_y: f64,
    pub current_year: i32,
}

impl ViewContext {
    pub fn new(view: View, base_path: BasePath, current_year: i32) -> Self {
        Self {
            view,
            base_path,
            scroll_y: 0.0,
            current_year,
        }
    }

    pub fn asset(&self, reference: &str) -> String {
        self.base_path.join(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_path_is_normalised() {
        assert_eq!(BasePath::new("").as_str(), "");
        assert_eq!(BasePath::new("/").as_str(), "");
        assert_eq!(BasePath::new("portfolio").as_str(), "/portfolio");
        assert_eq!(BasePath::new("/portfolio/").as_str(), "/portfolio");
    }

    #[test]
    fn join_prefixes_only_root_relative_references() {
        let base = BasePath::new("/portfolio");
        assert_eq!(base.join("/resume.pdf"), "/portfolio/resume.pdf");
        assert_eq!(base.join("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
        assert_eq!(base.join("//cdn.example.com/a.png"), "//cdn.example.com/a.png");
        assert_eq!(base.join("#about"), "#about");
        assert_eq!(BasePath::root().join("/resume.pdf"), "/resume.pdf");
    }

    #[test]
    fn only_home_owns_section_anchors() {
        assert!(View::Home.owns_anchor("projects"));
        assert!(!View::Gallery.owns_anchor("projects"));
        assert!(!View::Home.owns_anchor("gallery"));
    }

    #[test]
    fn page_links_carry_the_prefix() {
        let base = BasePath::new("/portfolio");
        assert_eq!(base.page(View::Home), "/portfolio/");
        assert_eq!(base.page(View::Gallery), "/portfolio/gallery/");
    }
}
