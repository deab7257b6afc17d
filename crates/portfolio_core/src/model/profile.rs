//! Profile model: biography, skills, certifications and timeline.
//!
//! # Invariants
//! - `TimelineEvent.id` is unique within a profile timeline.
//! - Unrecognized proficiency strings decode to `Proficiency::Unknown`
//!   (rank 0) instead of failing the whole profile.

use crate::model::date::parse_iso_date;
use crate::model::{merge, new_record_id, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ordinal skill proficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    #[serde(other)]
    Unknown,
}

impl Proficiency {
    /// Sort rank; higher is more proficient.
    pub fn rank(self) -> u8 {
        match self {
            Self::Expert => 4,
            Self::Advanced => 3,
            Self::Intermediate => 2,
            Self::Beginner => 1,
            Self::Unknown => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Devops,
    Data,
    Qa,
    Pm,
    Soft,
    Other,
}

impl SkillCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Devops => "devops",
            Self::Data => "data",
            Self::Qa => "qa",
            Self::Pm => "pm",
            Self::Soft => "soft",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: Proficiency,
    #[serde(default)]
    pub category: Option<SkillCategory>,
    #[serde(default)]
    pub years_of_experience: Option<u32>,
}

impl Skill {
    /// Grouping label; uncategorized skills land in `other`.
    pub fn category_label(&self) -> &'static str {
        self.category.unwrap_or(SkillCategory::Other).as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub issue_date: String,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
    #[serde(default)]
    pub credential_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventKind {
    Education,
    Achievement,
    Project,
    Certification,
    Experience,
}

impl TimelineEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Achievement => "achievement",
            Self::Project => "project",
            Self::Certification => "certification",
            Self::Experience => "experience",
        }
    }
}

/// Dated entry in the learning/experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TimelineEventKind,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TimelineEvent {
    pub fn new(kind: TimelineEventKind, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            date: date.into(),
            title: title.into(),
            description: String::new(),
            kind,
            tags: Vec::new(),
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineEventPatch {
    pub date: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: Option<TimelineEventKind>,
    pub tags: Option<Vec<String>>,
}

impl Record for TimelineEvent {
    type Patch = TimelineEventPatch;

    const KIND: &'static str = "timeline_event";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn apply_patch(&mut self, patch: TimelineEventPatch) {
        merge(&mut self.date, patch.date);
        merge(&mut self.title, patch.title);
        merge(&mut self.description, patch.description);
        merge(&mut self.kind, patch.kind);
        merge(&mut self.tags, patch.tags);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
}

/// Singleton owner profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub social: SocialLinks,
    #[serde(default)]
    pub story: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
}

/// Partial update for the profile's descriptive fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<Option<String>>,
    pub social: Option<SocialLinks>,
    pub story: Option<String>,
}

impl Record for Profile {
    type Patch = ProfilePatch;

    const KIND: &'static str = "profile";

    const NAME_FIELD: &'static str = "name";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn apply_patch(&mut self, patch: ProfilePatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.title, patch.title);
        merge(&mut self.bio, patch.bio);
        merge(&mut self.avatar, patch.avatar);
        merge(&mut self.social, patch.social);
        merge(&mut self.story, patch.story);
    }
}
