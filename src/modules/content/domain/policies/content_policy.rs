use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::OnceLock;

use email_address::EmailAddress;
use regex::Regex;

use crate::content::domain::entities::PortfolioContent;
use crate::content::domain::nav_target::NavTarget;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentValidationError {
    #[error("personal.{0} must not be empty")]
    MissingPersonalField(&'static str),

    #[error("personal.email is not a valid address: {0}")]
    InvalidEmail(String),

    #[error("social.{platform} is not an http(s), mailto or tel link: {url}")]
    InvalidSocialUrl { platform: String, url: String },

    #[error("navigation entry {name:?} has invalid target {href:?}")]
    InvalidNavigationTarget { name: String, href: String },

    #[error("{collection} contains duplicate id {id}")]
    DuplicateId { collection: &'static str, id: String },
}

/// Structural rules a content document must satisfy before it is served.
pub trait ContentPolicy: Send + Sync {
    fn validate(&self, content: &PortfolioContent) -> Result<(), Vec<ContentValidationError>>;
}

pub struct DefaultContentPolicy;

fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(https?://[^\s/]+\S*|mailto:\S+|tel:\+?[0-9()\-\s.]+)$")
            .expect("link pattern is a valid regex")
    })
}

fn anchor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$")
            .expect("anchor pattern is a valid regex")
    })
}

pub fn is_valid_link(url: &str) -> bool {
    link_pattern().is_match(url.trim())
}

fn duplicates<I, T>(collection: &'static str, ids: I, errors: &mut Vec<ContentValidationError>)
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Display,
{
    let mut seen = HashSet::new();
    for id in ids {
        let label = id.to_string();
        if !seen.insert(id) {
            errors.push(ContentValidationError::DuplicateId {
                collection,
                id: label,
            });
        }
    }
}

impl ContentPolicy for DefaultContentPolicy {
    fn validate(&self, content: &PortfolioContent) -> Result<(), Vec<ContentValidationError>> {
        let mut errors = Vec::new();
        let personal = &content.personal;

        for (field, value) in [
            ("name", &personal.name),
            ("title", &personal.title),
            ("email", &personal.email),
        ] {
            if value.trim().is_empty() {
                errors.push(ContentValidationError::MissingPersonalField(field));
            }
        }

        if !personal.email.trim().is_empty() && !EmailAddress::is_valid(personal.email.trim()) {
            errors.push(ContentValidationError::InvalidEmail(personal.email.clone()));
        }

        for link in content.social.links() {
            if !is_valid_link(link.url) {
                errors.push(ContentValidationError::InvalidSocialUrl {
                    platform: link.platform.to_string(),
                    url: link.url.to_string(),
                });
            }
        }

        for entry in &content.navigation {
            let valid = match entry.target() {
                Ok(NavTarget::Anchor(id)) => anchor_pattern().is_match(&id),
                Ok(NavTarget::Path(_)) => true,
                Err(_) => false,
            };
            if !valid {
                errors.push(ContentValidationError::InvalidNavigationTarget {
                    name: entry.name.clone(),
                    href: entry.href.clone(),
                });
            }
        }

        duplicates("experience", content.experience.iter().map(|e| e.id), &mut errors);
        duplicates("projects", content.projects.iter().map(|p| p.id), &mut errors);
        duplicates("gallery", content.gallery.iter().map(|g| g.id), &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
