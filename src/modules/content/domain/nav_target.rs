use std::fmt;

use crate::content::domain::entities::NavigationEntry;

/// Where a navigation entry points: an element on the home page or a
/// site-relative page path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NavTarget {
    /// `#about` -> `Anchor("about")`
    Anchor(String),
    /// `/gallery` -> `Path("/gallery")`
    Path(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("navigation target must start with '#' or '/': {0:?}")]
pub struct InvalidNavTarget(pub String);

impl NavTarget {
    pub fn parse(href: &str) -> Result<Self, InvalidNavTarget> {
        let href = href.trim();
        if let Some(anchor) = href.strip_prefix('#') {
            if anchor.is_empty() {
                return Err(InvalidNavTarget(href.to_string()));
            }
            Ok(NavTarget::Anchor(anchor.to_string()))
        } else if href.starts_with('/') {
            Ok(NavTarget::Path(href.to_string()))
        } else {
            Err(InvalidNavTarget(href.to_string()))
        }
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavTarget::Anchor(id) => write!(f, "#{id}"),
            NavTarget::Path(path) => f.write_str(path),
        }
    }
}

impl NavigationEntry {
    pub fn target(&self) -> Result<NavTarget, InvalidNavTarget> {
        NavTarget::parse(&self.href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_anchor_and_path_targets() {
        assert_eq!(
            NavTarget::parse("#about").unwrap(),
            NavTarget::Anchor("about".to_string())
        );
        assert_eq!(
            NavTarget::parse("/gallery").unwrap(),
            NavTarget::Path("/gallery".to_string())
        );
    }

    #[test]
    fn rejects_bare_words_and_empty_anchor() {
        assert!(NavTarget::parse("about").is_err());
        assert!(NavTarget::parse("#").is_err());
        assert!(NavTarget::parse("https://example.com").is_err());
    }

    #[test]
    fn display_round_trips_the_href() {
        assert_eq!(NavTarget::parse("#contact").unwrap().to_string(), "#contact");
        assert_eq!(NavTarget::parse("/gallery").unwrap().to_string(), "/gallery");
    }
}
