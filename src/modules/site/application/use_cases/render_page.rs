use serde::Deserialize;

use crate::site::domain::interaction::{NavEvent, NavState};

/// Request parameters for the home view. Each one reproduces a piece of
/// local interaction state so toggles work as plain links.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct HomeQuery {
    #[serde(default)]
    pub show_all: bool,
    pub video: Option<u32>,
    /// Comma separated project ids with expanded descriptions.
    pub expanded: Option<String>,
    pub menu: Option<String>,
    /// Scroll offset reported by the client, if any.
    pub y: Option<f64>,
}

impl HomeQuery {
    pub fn expanded_ids(&self) -> Vec<u32> {
        self.expanded
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter_map(|raw| raw.trim().parse().ok())
            .collect()
    }

    pub fn nav_state(&self) -> NavState {
        let mut nav = NavState::at_offset(self.y.unwrap_or(0.0));
        if self.menu.as_deref() == Some("open") {
            nav.apply(NavEvent::ToggleMenu);
        }
        nav
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GalleryQuery {
    pub photo: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
}

/// Renders complete HTML documents from the loaded content.
pub trait RenderPageUseCase: Send + Sync {
    fn render_home(&self, query: &HomeQuery) -> RenderedPage;
    fn render_gallery(&self, query: &GalleryQuery) -> RenderedPage;
    fn render_not_found(&self) -> RenderedPage;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanded_ids_skip_garbage() {
        let query = HomeQuery {
            expanded: Some("3, x,7,,".to_string()),
            ..HomeQuery::default()
        };
        assert_eq!(query.expanded_ids(), vec![3, 7]);
        assert!(HomeQuery::default().expanded_ids().is_empty());
    }

    #[test]
    fn nav_state_reads_menu_and_offset() {
        let query = HomeQuery {
            menu: Some("open".to_string()),
            y: Some(80.0),
            ..HomeQuery::default()
        };
        let nav = query.nav_state();
        assert!(nav.is_menu_open());
        assert!(nav.is_scrolled());

        assert!(!HomeQuery::default().nav_state().is_menu_open());
    }
}
