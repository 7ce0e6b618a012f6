use crate::content::domain::entities::{
    ExperienceEntry, ExperienceId, GalleryPhoto, NavigationEntry, PersonalInfo, PhotoId,
    PortfolioContent, Project, ProjectId, Skills, SocialLinks, Stat,
};

fn nav(name: &str, href: &str) -> NavigationEntry {
    NavigationEntry {
        name: name.to_string(),
        href: href.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A complete, valid document: three projects, two jobs, one photo.
pub fn sample_content() -> PortfolioContent {
    PortfolioContent {
        personal: PersonalInfo {
            name: "Ada Lovelace".to_string(),
            title: "Systems Engineer".to_string(),
            tagline: "Building reliable engines".to_string(),
            bio: "I design analytical engines and the programs that run on them.".to_string(),
            location: "London".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            resume_url: "/resume.pdf".to_string(),
        },
        social: SocialLinks {
            github: Some("https://github.com/ada".to_string()),
            linkedin: Some("https://linkedin.com/in/ada".to_string()),
            twitter: None,
            other: Default::default(),
        },
        navigation: vec![
            nav("About", "#about"),
            nav("Experience", "#experience"),
            nav("Projects", "#projects"),
            nav("Skills", "#skills"),
            nav("Gallery", "/gallery"),
            nav("Contact", "#contact"),
        ],
        stats: vec![
            Stat {
                label: "Years Experience".to_string(),
                value: "10+".to_string(),
            },
            Stat {
                label: "Projects Shipped".to_string(),
                value: "25".to_string(),
            },
        ],
        experience: vec![
            ExperienceEntry {
                id: ExperienceId(1),
                company: "Analytical Engines Ltd".to_string(),
                role: "Principal Engineer".to_string(),
                duration: "2020 - Present".to_string(),
                location: "London".to_string(),
                description: "Leads the engine runtime team.".to_string(),
                highlights: strings(&["Cut boot time in half", "Shipped the loop unit"]),
                technologies: strings(&["Rust", "Tokio"]),
            },
            ExperienceEntry {
                id: ExperienceId(2),
                company: "Difference Works".to_string(),
                role: "Engineer".to_string(),
                duration: "2015 - 2020".to_string(),
                location: "Remote".to_string(),
                description: "Built the table generator.".to_string(),
                highlights: strings(&["Automated table printing"]),
                technologies: strings(&["C", "Python"]),
            },
        ],
        projects: projects(3),
        skills: Skills {
            frontend: strings(&["TypeScript", "HTML"]),
            backend: strings(&["Rust", "Actix"]),
            ml: strings(&["PyTorch"]),
            vectordb: Vec::new(),
            tools: strings(&["Docker"]),
        },
        gallery: vec![sample_photo(1, "Dawn")],
    }
}

pub fn sample_project(id: u32, title: &str) -> Project {
    Project {
        id: ProjectId(id),
        title: title.to_string(),
        description: format!("Short description of {title}."),
        technologies: strings(&["Rust"]),
        featured: false,
        video_demo: None,
    }
}

/// `count` projects with ids `1..=count`, titled "Project i", no video.
pub fn projects(count: usize) -> Vec<Project> {
    (1..=count as u32)
        .map(|i| sample_project(i, &format!("Project {i}")))
        .collect()
}

pub fn project_with_video(id: u32, video: &str) -> Project {
    Project {
        video_demo: Some(video.to_string()),
        ..sample_project(id, &format!("Demo {id}"))
    }
}

pub fn sample_photo(id: u32, title: &str) -> GalleryPhoto {
    GalleryPhoto {
        id: PhotoId(id),
        title: title.to_string(),
        description: format!("{title} over the harbour"),
        image: format!("/images/gallery/{id}.jpg"),
        location: None,
        date: None,
    }
}
