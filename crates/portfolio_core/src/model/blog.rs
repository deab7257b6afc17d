//! Blog post model.
//!
//! # Invariants
//! - `id` and `slug` are unique across a post set (enforced by the store).
//! - `published_at` is the ordering date; `updated_at` is informational.

use crate::model::date::parse_iso_date;
use crate::model::{merge, new_record_id, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Blog post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    /// ISO 8601 date.
    pub published_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub reading_time_minutes: Option<u32>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

impl BlogPost {
    /// Creates a post with a generated id.
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        published_at: impl Into<String>,
    ) -> Self {
        Self::with_id(new_record_id(), title, slug, published_at)
    }

    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        slug: impl Into<String>,
        published_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            excerpt: String::new(),
            content: String::new(),
            author: String::new(),
            published_at: published_at.into(),
            updated_at: None,
            tags: Vec::new(),
            featured: false,
            reading_time_minutes: None,
            thumbnail: None,
            seo_description: None,
        }
    }

    pub fn published_on(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.published_at)
    }
}

/// Partial update for `BlogPost`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostPatch {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<String>,
    pub updated_at: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub reading_time_minutes: Option<Option<u32>>,
    pub thumbnail: Option<Option<String>>,
    pub seo_description: Option<Option<String>>,
}

impl Record for BlogPost {
    type Patch = BlogPostPatch;

    const KIND: &'static str = "blog_post";

    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> Option<&str> {
        Some(&self.slug)
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn apply_patch(&mut self, patch: BlogPostPatch) {
        merge(&mut self.slug, patch.slug);
        merge(&mut self.title, patch.title);
        merge(&mut self.excerpt, patch.excerpt);
        merge(&mut self.content, patch.content);
        merge(&mut self.author, patch.author);
        merge(&mut self.published_at, patch.published_at);
        merge(&mut self.updated_at, patch.updated_at);
        merge(&mut self.tags, patch.tags);
        merge(&mut self.featured, patch.featured);
        merge(&mut self.reading_time_minutes, patch.reading_time_minutes);
        merge(&mut self.thumbnail, patch.thumbnail);
        merge(&mut self.seo_description, patch.seo_description);
    }
}
