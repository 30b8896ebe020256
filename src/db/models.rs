//! Domain models for the portfolio document store.
//!
//! Each persisted record is built through a `new` constructor that validates
//! the caller's input, generates the identifier, and stamps the timestamps.
//! Records are stored as their serde JSON form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::utils::{current_timestamp, generate_entity_id};
use super::validation::{ValidationError, Validator};

/// UUID string identifying a document.
pub type Id = String;

// =============================================================================
// Projects
// =============================================================================

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Validate `input` and build a project with a fresh id and timestamps.
    pub fn new(input: NewProject) -> Result<Self, ValidationError> {
        let mut v = Validator::default();
        v.length("title", &input.title, 1, 200);
        v.length("description", &input.description, 1, 1000);
        v.length("image", &input.image, 1, usize::MAX);
        v.non_empty_list("technologies", &input.technologies);
        v.length("category", &input.category, 1, 100);
        v.finish()?;

        let now = current_timestamp();
        Ok(Self {
            id: generate_entity_id(),
            title: input.title,
            description: input.description,
            image: input.image,
            technologies: input.technologies,
            category: input.category,
            demo_url: input.demo_url,
            github_url: input.github_url,
            featured: input.featured,
            created_at: now,
            updated_at: now,
        })
    }
}

// =============================================================================
// Skills
// =============================================================================

/// The fixed set of skill buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Design,
    Tools,
}

impl SkillCategory {
    /// Every category, in response order.
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Design,
        SkillCategory::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Design => "design",
            SkillCategory::Tools => "tools",
        }
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(SkillCategory::Frontend),
            "backend" => Ok(SkillCategory::Backend),
            "design" => Ok(SkillCategory::Design),
            "tools" => Ok(SkillCategory::Tools),
            _ => Err(format!("Unknown skill category: {}", s)),
        }
    }
}

/// A single skill with proficiency level and experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Id,
    pub name: String,
    pub level: u8,
    pub years: u8,
    pub category: SkillCategory,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new skill.
///
/// `level` and `years` are wide integers so that out-of-range input is
/// reported as a validation failure instead of a decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewSkill {
    pub name: String,
    pub level: i64,
    pub years: i64,
    pub category: SkillCategory,
}

impl NewSkill {
    pub fn new(name: &str, level: i64, years: i64, category: SkillCategory) -> Self {
        Self {
            name: name.to_string(),
            level,
            years,
            category,
        }
    }
}

impl Skill {
    /// Validate `input` and build a skill with a fresh id and timestamp.
    pub fn new(input: NewSkill) -> Result<Self, ValidationError> {
        let mut v = Validator::default();
        v.length("name", &input.name, 1, 100);
        let level = v.range("level", input.level, 0, 100);
        let years = v.range("years", input.years, 0, 50);
        v.finish()?;

        Ok(Self {
            id: generate_entity_id(),
            name: input.name,
            level: level.unwrap_or_default(),
            years: years.unwrap_or_default(),
            category: input.category,
            created_at: current_timestamp(),
        })
    }
}

/// Skills bucketed by category. All four buckets are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillsByCategory {
    pub frontend: Vec<Skill>,
    pub backend: Vec<Skill>,
    pub design: Vec<Skill>,
    pub tools: Vec<Skill>,
}

impl SkillsByCategory {
    pub fn push(&mut self, skill: Skill) {
        self.bucket_mut(skill.category).push(skill);
    }

    pub fn get(&self, category: SkillCategory) -> &[Skill] {
        match category {
            SkillCategory::Frontend => &self.frontend,
            SkillCategory::Backend => &self.backend,
            SkillCategory::Design => &self.design,
            SkillCategory::Tools => &self.tools,
        }
    }

    /// Total number of skills across every bucket.
    pub fn total(&self) -> usize {
        SkillCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    fn bucket_mut(&mut self, category: SkillCategory) -> &mut Vec<Skill> {
        match category {
            SkillCategory::Frontend => &mut self.frontend,
            SkillCategory::Backend => &mut self.backend,
            SkillCategory::Design => &mut self.design,
            SkillCategory::Tools => &mut self.tools,
        }
    }
}

impl FromIterator<Skill> for SkillsByCategory {
    fn from_iter<I: IntoIterator<Item = Skill>>(iter: I) -> Self {
        let mut grouped = Self::default();
        for skill in iter {
            grouped.push(skill);
        }
        grouped
    }
}

// =============================================================================
// Contacts
// =============================================================================

/// A contact form submission as sent by a visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A stored contact message. Never updated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Id,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Validate a submission and build an unread contact record.
    pub fn new(input: ContactSubmission) -> Result<Self, ValidationError> {
        let mut v = Validator::default();
        v.length("name", &input.name, 1, 100);
        v.email("email", &input.email);
        v.length("subject", &input.subject, 1, 200);
        v.length("message", &input.message, 1, 2000);
        v.finish()?;

        Ok(Self {
            id: generate_entity_id(),
            name: input.name,
            email: input.email,
            subject: input.subject,
            message: input.message,
            is_read: false,
            created_at: current_timestamp(),
        })
    }
}

// =============================================================================
// Contact info
// =============================================================================

/// Public contact details of the portfolio owner. At most one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub id: Id,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub response_time: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for contact info.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewContactInfo {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub response_time: Option<String>,
}

impl ContactInfo {
    pub fn new(input: NewContactInfo) -> Result<Self, ValidationError> {
        let mut v = Validator::default();
        v.email("email", &input.email);
        v.finish()?;

        Ok(Self {
            id: generate_entity_id(),
            email: input.email,
            phone: input.phone,
            location: input.location,
            availability: input.availability,
            response_time: input.response_time,
            updated_at: current_timestamp(),
        })
    }
}
