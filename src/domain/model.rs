use serde::{Deserialize, Serialize};

/// The JSON payload the page is rendered from. Every field is required, so a
/// document that would leave a region half-populated is rejected at parse
/// time instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub personal: Personal,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub bio: String,
    pub email: String,
    pub social: Social,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Social {
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: i64,
}

impl Skill {
    /// Bar width in percent.
    pub fn clamped_level(&self) -> u8 {
        self.level.clamp(0, 100) as u8
    }

    pub fn is_level_in_range(&self) -> bool {
        (0..=100).contains(&self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub job: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

impl ContentDocument {
    pub fn from_json_slice(bytes: &[u8]) -> crate::utils::error::Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
