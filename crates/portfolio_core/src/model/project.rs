//! Project case-study model.
//!
//! # Responsibility
//! - Define the project record and its stack/category/status vocabulary.
//! - Expose the date views used by sorting and grouping.
//!
//! # Invariants
//! - `id` and `slug` are unique across a project set (enforced by the store).
//! - `end_date` is absent for ongoing work; sorting then falls back to
//!   `start_date`.

use crate::model::date::parse_iso_date;
use crate::model::{merge, new_record_id, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closed set of project categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    Software,
    Product,
    ProjectManagement,
    Event,
    Research,
    Community,
    SocialImpact,
    Education,
    #[default]
    Other,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 9] = [
        Self::Software,
        Self::Product,
        Self::ProjectManagement,
        Self::Event,
        Self::Research,
        Self::Community,
        Self::SocialImpact,
        Self::Education,
        Self::Other,
    ];

    /// Stable label, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Software => "software",
            Self::Product => "product",
            Self::ProjectManagement => "project-management",
            Self::Event => "event",
            Self::Research => "research",
            Self::Community => "community",
            Self::SocialImpact => "social-impact",
            Self::Education => "education",
            Self::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value.trim())
    }
}

/// Delivery status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Concept,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Concept => "concept",
        }
    }
}

/// Named dimension of a project's stack breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StackDimension {
    Technologies,
    Tools,
    Methodologies,
    Platforms,
    Domains,
    Skills,
}

impl StackDimension {
    pub const ALL: [StackDimension; 6] = [
        Self::Technologies,
        Self::Tools,
        Self::Methodologies,
        Self::Platforms,
        Self::Domains,
        Self::Skills,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Technologies => "technologies",
            Self::Tools => "tools",
            Self::Methodologies => "methodologies",
            Self::Platforms => "platforms",
            Self::Domains => "domains",
            Self::Skills => "skills",
        }
    }
}

/// Technology/skill breakdown grouped by dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectStack {
    pub technologies: Vec<String>,
    pub tools: Vec<String>,
    pub methodologies: Vec<String>,
    pub platforms: Vec<String>,
    pub domains: Vec<String>,
    pub skills: Vec<String>,
}

impl ProjectStack {
    pub fn dimension(&self, dimension: StackDimension) -> &[String] {
        match dimension {
            StackDimension::Technologies => &self.technologies,
            StackDimension::Tools => &self.tools,
            StackDimension::Methodologies => &self.methodologies,
            StackDimension::Platforms => &self.platforms,
            StackDimension::Domains => &self.domains,
            StackDimension::Skills => &self.skills,
        }
    }

    /// Every entry across all dimensions, in dimension order.
    pub fn entries(&self) -> impl Iterator<Item = &str> + '_ {
        StackDimension::ALL
            .into_iter()
            .flat_map(move |dimension| self.dimension(dimension).iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectImages {
    pub thumbnail: String,
    pub hero: String,
    pub screenshots: Vec<String>,
}

/// Technical challenge documented in a case study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub title: String,
    pub description: String,
    pub solution: String,
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub lessons_learned: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Demo,
    Code,
    Article,
    Video,
}

/// Link to an external resource (demo, repository, article, video).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<LinkKind>,
}

/// Portfolio project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub stack: ProjectStack,
    #[serde(default)]
    pub images: ProjectImages,
    #[serde(default)]
    pub challenges: Vec<Challenge>,
    #[serde(default)]
    pub key_features: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub links: Vec<ExternalLink>,
    #[serde(default)]
    pub featured: bool,
    /// ISO 8601 date.
    pub start_date: String,
    /// ISO 8601 date; `None` while the project is ongoing.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: ProjectCategory,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
}

impl Project {
    /// Creates a project with a generated id and empty descriptive fields.
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        start_date: impl Into<String>,
    ) -> Self {
        Self::with_id(new_record_id(), title, slug, start_date)
    }

    /// Creates a project with a caller-provided id.
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        slug: impl Into<String>,
        start_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            short_description: String::new(),
            full_description: String::new(),
            problem: String::new(),
            solution: String::new(),
            stack: ProjectStack::default(),
            images: ProjectImages::default(),
            challenges: Vec::new(),
            key_features: Vec::new(),
            metrics: Vec::new(),
            links: Vec::new(),
            featured: false,
            start_date: start_date.into(),
            end_date: None,
            tags: Vec::new(),
            category: ProjectCategory::Other,
            status: None,
        }
    }

    /// Date used for chronological ordering.
    ///
    /// `end_date` when present, otherwise `start_date`. A present but
    /// unparseable `end_date` yields `None` rather than falling back.
    pub fn sort_date(&self) -> Option<NaiveDate> {
        match self.end_date.as_deref() {
            Some(end) => parse_iso_date(end),
            None => parse_iso_date(&self.start_date),
        }
    }

    /// Parsed `end_date`, used by year filters.
    pub fn end_date_parsed(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(parse_iso_date)
    }

    /// Free-text tags followed by every stack entry.
    pub fn tag_and_stack_values(&self) -> impl Iterator<Item = &str> + '_ {
        self.tags.iter().map(String::as_str).chain(self.stack.entries())
    }
}

/// Partial update for `Project`; carries no `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub problem: Option<String>,
    pub solution: Option<String>,
    pub stack: Option<ProjectStack>,
    pub images: Option<ProjectImages>,
    pub challenges: Option<Vec<Challenge>>,
    pub key_features: Option<Vec<String>>,
    pub metrics: Option<Vec<Metric>>,
    pub links: Option<Vec<ExternalLink>>,
    pub featured: Option<bool>,
    pub start_date: Option<String>,
    pub end_date: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub category: Option<ProjectCategory>,
    pub status: Option<Option<ProjectStatus>>,
}

impl Record for Project {
    type Patch = ProjectPatch;

    const KIND: &'static str = "project";

    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> Option<&str> {
        Some(&self.slug)
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn apply_patch(&mut self, patch: ProjectPatch) {
        merge(&mut self.slug, patch.slug);
        merge(&mut self.title, patch.title);
        merge(&mut self.short_description, patch.short_description);
        merge(&mut self.full_description, patch.full_description);
        merge(&mut self.problem, patch.problem);
        merge(&mut self.solution, patch.solution);
        merge(&mut self.stack, patch.stack);
        merge(&mut self.images, patch.images);
        merge(&mut self.challenges, patch.challenges);
        merge(&mut self.key_features, patch.key_features);
        merge(&mut self.metrics, patch.metrics);
        merge(&mut self.links, patch.links);
        merge(&mut self.featured, patch.featured);
        merge(&mut self.start_date, patch.start_date);
        merge(&mut self.end_date, patch.end_date);
        merge(&mut self.tags, patch.tags);
        merge(&mut self.category, patch.category);
        merge(&mut self.status, patch.status);
    }
}
