//! Local interaction state. Each section owns its own state value; nothing
//! here is shared between sections or kept across page loads.

pub mod description;
pub mod gallery_state;
pub mod nav_state;
pub mod projects_state;

pub use gallery_state::{GalleryEvent, GalleryState};
pub use nav_state::{MenuState, NavEvent, NavState};
pub use projects_state::{ProjectsEvent, ProjectsState, VideoSelection};

use crate::site::domain::view_context::{BasePath, View};

/// Everything interactive on the home view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeState {
    pub nav: NavState,
    pub projects: ProjectsState,
}

impl HomeState {
    /// Link that loads the home view in this state.
    pub fn href(&self, base: &BasePath) -> String {
        let mut pairs = self.nav.query_pairs();
        pairs.extend(self.projects.query_pairs());
        page_href(base, View::Home, &pairs, None)
    }

    /// Same as `href`, landing on a section.
    pub fn href_at(&self, base: &BasePath, anchor: &str) -> String {
        let mut pairs = self.nav.query_pairs();
        pairs.extend(self.projects.query_pairs());
        page_href(base, View::Home, &pairs, Some(anchor))
    }
}

impl GalleryState {
    pub fn href(&self, base: &BasePath) -> String {
        page_href(base, View::Gallery, &self.query_pairs(), None)
    }
}

fn page_href(
    base: &BasePath,
    view: View,
    pairs: &[(&'static str, String)],
    anchor: Option<&str>,
) -> String {
    let mut href = base.page(view);
    if !pairs.is_empty() {
        let query: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
        href.push('?');
        href.push_str(&query.join("&"));
    }
    if let Some(anchor) = anchor {
        href.push('#');
        href.push_str(anchor);
    }
    href
}
