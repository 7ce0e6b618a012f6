use crate::content::domain::nav_target::NavTarget;
use crate::site::domain::view_context::{View, ViewContext};

/// What activating a navigation link does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Load another page.
    Navigate { href: String },
    /// Smooth-scroll to an element on the current page.
    ScrollTo { anchor: String },
    /// Load the page owning the anchor, then scroll to it.
    NavigateThenScroll { href: String, anchor: String },
    /// Nothing to do; the target does not exist on this page.
    None,
}

impl NavAction {
    /// Link target that performs the action without script.
    pub fn href(&self) -> Option<String> {
        match self {
            NavAction::Navigate { href } | NavAction::NavigateThenScroll { href, .. } => {
                Some(href.clone())
            }
            NavAction::ScrollTo { anchor } => Some(format!("#{anchor}")),
            NavAction::None => None,
        }
    }

    pub fn scroll_anchor(&self) -> Option<&str> {
        match self {
            NavAction::ScrollTo { anchor } => Some(anchor),
            _ => None,
        }
    }
}

/// Header navigation: anchors always resolve, loading the owning view first
/// when needed.
pub fn resolve_nav(target: &NavTarget, ctx: &ViewContext) -> NavAction {
    match target {
        NavTarget::Path(path) => NavAction::Navigate {
            href: ctx.base_path.join(path),
        },
        NavTarget::Anchor(anchor) => {
            let owner = View::anchor_owner(anchor);
            if ctx.view == owner {
                NavAction::ScrollTo {
                    anchor: anchor.clone(),
                }
            } else {
                NavAction::NavigateThenScroll {
                    href: format!("{}#{anchor}", ctx.base_path.page(owner)),
                    anchor: anchor.clone(),
                }
            }
        }
    }
}

/// Footer shortcuts: anchors resolve against the page the footer is on and
/// do nothing when that page has no such element.
pub fn resolve_footer_link(target: &NavTarget, ctx: &ViewContext) -> NavAction {
    match target {
        NavTarget::Path(path) => NavAction::Navigate {
            href: ctx.base_path.join(path),
        },
        NavTarget::Anchor(anchor) if ctx.view.owns_anchor(anchor) => NavAction::ScrollTo {
            anchor: anchor.clone(),
        },
        NavTarget::Anchor(_) => NavAction::None,
    }
}
