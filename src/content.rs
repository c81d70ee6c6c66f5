use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const PORTFOLIO_FILE: &str = "portfolio.json";
pub const MAX_PROFICIENCY: u8 = 5;
/// Site icon, served from `public/`.
pub const FAVICON: &str = "/favicon.svg";

static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| match load_portfolio() {
    Ok(p) => p,
    Err(e) => {
        log::error!("{e}, rendering an empty portfolio");
        Portfolio::default()
    }
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(&'static str),
    #[error("Couldn't parse portfolio content: {0}")]
    ParseError(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub experience: Vec<Job>,
    pub education: Vec<Degree>,
    pub awards: Vec<Award>,
    pub skills: Skills,
    pub contact: Contact,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub headshot: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub goals: String,
    pub challenges: String,
    pub outcomes: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl Project {
    pub fn detail(&self, detail: ProjectDetail) -> &str {
        match detail {
            ProjectDetail::Goals => &self.goals,
            ProjectDetail::Challenges => &self.challenges,
            ProjectDetail::Outcomes => &self.outcomes,
        }
    }
}

/// The collapsible write-up sections of a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectDetail {
    Goals,
    Challenges,
    Outcomes,
}

impl ProjectDetail {
    pub const ALL: [ProjectDetail; 3] = [Self::Goals, Self::Challenges, Self::Outcomes];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Goals => "Goals",
            Self::Challenges => "Challenges",
            Self::Outcomes => "Outcomes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub period: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Degree {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    pub organization: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub linkedin: String,
    pub resume_url: String,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub programming: Vec<Skill>,
    pub hardware: Vec<Skill>,
    pub methodologies: Vec<Skill>,
}

impl Skills {
    pub fn category(&self, category: SkillCategory) -> &[Skill] {
        match category {
            SkillCategory::Programming => &self.programming,
            SkillCategory::Hardware => &self.hardware,
            SkillCategory::Methodologies => &self.methodologies,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillCategory {
    #[default]
    Programming,
    Hardware,
    Methodologies,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [Self::Programming, Self::Hardware, Self::Methodologies];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Programming => "Programming",
            Self::Hardware => "Hardware",
            Self::Methodologies => "Methodologies",
        }
    }

    pub fn icon(&self) -> SkillIcon {
        match self {
            Self::Programming => SkillIcon::Code,
            Self::Hardware => SkillIcon::Circuit,
            Self::Methodologies => SkillIcon::Layers,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Programming => 0,
            Self::Hardware => 1,
            Self::Methodologies => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: u8,
    #[serde(default)]
    pub icon: SkillIcon,
}

impl Skill {
    /// Filled/empty state of each proficiency dot, clamped to 1..=5.
    pub fn dots(&self) -> [bool; MAX_PROFICIENCY as usize] {
        let level = self.proficiency.clamp(1, MAX_PROFICIENCY) as usize;
        std::array::from_fn(|i| i < level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    #[default]
    Code,
    Cpu,
    Circuit,
    Zap,
    Layers,
    Wrench,
    Server,
    Wifi,
    Database,
}

impl SkillIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Cpu => "▣",
            Self::Circuit => "⌁",
            Self::Zap => "⚡",
            Self::Layers => "☰",
            Self::Wrench => "🔧",
            Self::Server => "▤",
            Self::Wifi => "📶",
            Self::Database => "⛁",
        }
    }
}

pub fn parse_portfolio(data: &[u8]) -> Result<Portfolio, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::ParseError(e.to_string()))
}

pub fn load_portfolio() -> Result<Portfolio, ContentError> {
    let file = Assets::get(PORTFOLIO_FILE).ok_or(ContentError::NotFound(PORTFOLIO_FILE))?;
    parse_portfolio(&file.data)
}

/// Page content, parsed once per process.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(proficiency: u8) -> Skill {
        Skill {
            name: "VHDL".to_string(),
            proficiency,
            icon: SkillIcon::Code,
        }
    }

    #[test]
    fn test_embedded_portfolio_parses() {
        let loaded = load_portfolio().expect("embedded content should parse");

        assert!(!loaded.profile.name.is_empty());
        assert_eq!(loaded.projects.len(), 3);
        assert!(!loaded.experience.is_empty());
        assert_eq!(loaded.education.len(), 2);
        assert_eq!(loaded.awards.len(), 2);
        for category in SkillCategory::ALL {
            assert!(!loaded.skills.category(category).is_empty());
        }
        assert!(loaded.contact.mailto().starts_with("mailto:"));
        assert_eq!(&loaded, portfolio());
    }

    #[test]
    fn test_linked_assets_are_served() {
        let loaded = load_portfolio().expect("embedded content should parse");
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for path in [
            loaded.profile.headshot.as_str(),
            loaded.contact.resume_url.as_str(),
            FAVICON,
        ] {
            let local = path.strip_prefix('/').expect("assets are site-absolute");
            assert!(public.join(local).is_file(), "missing asset {path}");
        }
    }

    #[test]
    fn test_malformed_content_is_an_error() {
        let err = parse_portfolio(b"{ \"projects\": 12 }").expect_err("projects must be a list");
        assert!(matches!(err, ContentError::ParseError(_)));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let portfolio = parse_portfolio(br#"{ "profile": { "name": "A", "title": "B", "tagline": "C", "headshot": "/a.png" } }"#)
            .expect("sections are optional");
        assert_eq!(portfolio.profile.name, "A");
        assert!(portfolio.projects.is_empty());
        assert!(portfolio.skills.category(SkillCategory::Hardware).is_empty());
    }

    #[test]
    fn test_proficiency_dots() {
        assert_eq!(skill(3).dots(), [true, true, true, false, false]);
        assert_eq!(skill(5).dots(), [true; 5]);
        assert_eq!(skill(0).dots(), [true, false, false, false, false]);
        assert_eq!(skill(9).dots(), [true; 5]);
    }

    #[test]
    fn test_unknown_icon_is_rejected_but_missing_icon_defaults() {
        assert!(serde_json::from_str::<Skill>(r#"{"name":"x","proficiency":2,"icon":"laser"}"#).is_err());
        let s: Skill = serde_json::from_str(r#"{"name":"x","proficiency":2}"#).expect("icon is optional");
        assert_eq!(s.icon, SkillIcon::Code);
    }

    #[test]
    fn test_project_details_follow_labels() {
        let loaded = load_portfolio().expect("embedded content should parse");
        let project = &loaded.projects[1];
        assert_eq!(project.detail(ProjectDetail::Goals), project.goals);
        assert_eq!(project.detail(ProjectDetail::Outcomes), project.outcomes);
        assert_eq!(
            ProjectDetail::ALL.map(|d| d.label()),
            ["Goals", "Challenges", "Outcomes"]
        );
    }
}
