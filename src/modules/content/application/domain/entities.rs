use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub profile_image: String,
    pub about_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub github_url: String,
}

/// Everything a project carries except its identity.
/// Used as the payload for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub image: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
}

impl ProjectDraft {
    pub fn with_id(self, id: impl Into<String>) -> Project {
        Project {
            id: id.into(),
            title: self.title,
            image: self.image,
            description: self.description,
            technologies: self.technologies,
            live_url: self.live_url,
            github_url: self.github_url,
        }
    }
}

impl From<Project> for ProjectDraft {
    fn from(project: Project) -> Self {
        Self {
            title: project.title,
            image: project.image,
            description: project.description,
            technologies: project.technologies,
            live_url: project.live_url,
            github_url: project.github_url,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    Basic,
    Intermediate,
    Experienced,
}

/// Either a named proficiency (`"Intermediate"`) or a percentage (`85`).
///
/// Numeric levels from the wire are rounded and clamped to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "RawSkillLevel")]
pub enum SkillLevel {
    Named(Proficiency),
    Percent(u8),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSkillLevel {
    Named(Proficiency),
    Number(f64),
}

impl From<RawSkillLevel> for SkillLevel {
    fn from(raw: RawSkillLevel) -> Self {
        match raw {
            RawSkillLevel::Named(p) => SkillLevel::Named(p),
            RawSkillLevel::Number(n) => SkillLevel::Percent(n.round().clamp(0.0, 100.0) as u8),
        }
    }
}

impl SkillLevel {
    /// Percent levels are clamped to 0..=100.
    pub fn percent(value: u8) -> Self {
        SkillLevel::Percent(value.min(100))
    }
}

impl From<Proficiency> for SkillLevel {
    fn from(p: Proficiency) -> Self {
        SkillLevel::Named(p)
    }
}

fn new_skill_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Stable identity. Payloads that omit it get a fresh one on decode.
    #[serde(default = "new_skill_id")]
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: impl Into<SkillLevel>) -> Self {
        Self {
            id: new_skill_id(),
            name: name.into(),
            level: level.into(),
            category: None,
        }
    }

}

/// Id-addressed edits over a skill list.
///
/// Lists are never edited by position so two editors working on the
/// same list cannot clobber the wrong entry after a reorder.
pub trait SkillListExt {
    fn find_skill(&self, id: &str) -> Option<&Skill>;
    fn with_skill_replaced(&self, id: &str, skill: Skill) -> Vec<Skill>;
    fn without_skill(&self, id: &str) -> Vec<Skill>;
}

impl SkillListExt for [Skill] {
    fn find_skill(&self, id: &str) -> Option<&Skill> {
        self.iter().find(|s| s.id == id)
    }

    fn with_skill_replaced(&self, id: &str, skill: Skill) -> Vec<Skill> {
        self.iter()
            .map(|s| {
                if s.id == id {
                    Skill {
                        id: s.id.clone(),
                        ..skill.clone()
                    }
                } else {
                    s.clone()
                }
            })
            .collect()
    }

    fn without_skill(&self, id: &str) -> Vec<Skill> {
        self.iter().filter(|s| s.id != id).cloned().collect()
    }
}

/// Wire shape of `/skills`. Either list may be missing in a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontend: Option<Vec<Skill>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<Vec<Skill>>,
}

impl SkillSet {
    pub fn new(frontend: Vec<Skill>, backend: Vec<Skill>) -> Self {
        Self {
            frontend: Some(frontend),
            backend: Some(backend),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    /// `YYYY-MM`
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }
}
