use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

//
// ──────────────────────────────────────────────────────────
// Identifiers
// ──────────────────────────────────────────────────────────
//

macro_rules! content_id {
    ($name:ident) => {
        #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

content_id!(ExperienceId);
content_id!(ProjectId);
content_id!(PhotoId);

//
// ──────────────────────────────────────────────────────────
// Document
// ──────────────────────────────────────────────────────────
//

/// The whole content document, as stored in `portfolio.json`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    pub personal: PersonalInfo,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub navigation: Vec<NavigationEntry>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub gallery: Vec<GalleryPhoto>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub resume_url: String,
}

impl PersonalInfo {
    /// First word of the name, used for the brand mark.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }
}

/// Platform name to profile URL. The three well-known platforms keep a fixed
/// display order; anything else follows alphabetically.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink<'a> {
    pub platform: &'a str,
    pub label: String,
    pub url: &'a str,
}

impl SocialLinks {
    /// Present links in display order. Blank values are skipped.
    pub fn links(&self) -> Vec<SocialLink<'_>> {
        let known = [
            ("github", "GitHub", self.github.as_deref()),
            ("linkedin", "LinkedIn", self.linkedin.as_deref()),
            ("twitter", "Twitter", self.twitter.as_deref()),
        ];

        let mut links: Vec<SocialLink<'_>> = known
            .into_iter()
            .filter_map(|(platform, label, url)| {
                url.filter(|u| !u.trim().is_empty()).map(|url| SocialLink {
                    platform,
                    label: label.to_string(),
                    url,
                })
            })
            .collect();

        links.extend(
            self.other
                .iter()
                .filter(|(_, url)| !url.trim().is_empty())
                .map(|(platform, url)| SocialLink {
                    platform: platform.as_str(),
                    label: capitalize(platform),
                    url: url.as_str(),
                }),
        );

        links
    }

    pub fn get(&self, platform: &str) -> Option<&str> {
        match platform {
            "github" => self.github.as_deref(),
            "linkedin" => self.linkedin.as_deref(),
            "twitter" => self.twitter.as_deref(),
            other => self.other.get(other).map(String::as_str),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NavigationEntry {
    pub name: String,
    pub href: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExperienceEntry {
    pub id: ExperienceId,
    pub company: String,
    pub role: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_demo: Option<String>,
}

impl Project {
    pub fn video(&self) -> Option<&str> {
        self.video_demo.as_deref().filter(|v| !v.trim().is_empty())
    }
}

/// Skill buckets. The set of buckets is fixed; a missing bucket is empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Skills {
    #[serde(default)]
    pub frontend: Vec<String>,
    #[serde(default)]
    pub backend: Vec<String>,
    #[serde(default)]
    pub ml: Vec<String>,
    #[serde(default)]
    pub vectordb: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Ml,
    VectorDb,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Ml,
        SkillCategory::VectorDb,
        SkillCategory::Tools,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Ml => "AI / ML",
            SkillCategory::VectorDb => "Vector Databases",
            SkillCategory::Tools => "Tools & Infrastructure",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Ml => "ml",
            SkillCategory::VectorDb => "vectordb",
            SkillCategory::Tools => "tools",
        }
    }
}

impl Skills {
    pub fn bucket(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Frontend => &self.frontend,
            SkillCategory::Backend => &self.backend,
            SkillCategory::Ml => &self.ml,
            SkillCategory::VectorDb => &self.vectordb,
            SkillCategory::Tools => &self.tools,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GalleryPhoto {
    pub id: PhotoId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl GalleryPhoto {
    pub fn image(&self) -> Option<&str> {
        Some(self.image.as_str()).filter(|i| !i.trim().is_empty())
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.trim().is_empty())
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref().filter(|d| !d.trim().is_empty())
    }
}
