//! Embedded seed content.
//!
//! # Responsibility
//! - Ship the initial record sets inside the binary.
//! - Decode them once into typed records.
//!
//! # Invariants
//! - Seed documents are compiled in with `include_str!`; no file I/O.
//! - Decoding failures surface as `SeedError`, never a panic.

use crate::model::blog::BlogPost;
use crate::model::profile::Profile;
use crate::model::project::Project;
use log::info;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};

const PROJECTS_JSON: &str = include_str!("data/projects.json");
const BLOG_POSTS_JSON: &str = include_str!("data/blog.json");
const PROFILE_JSON: &str = include_str!("data/profile.json");

/// Failure to decode one embedded seed document.
#[derive(Debug)]
pub struct SeedError {
    pub document: &'static str,
    pub source: serde_json::Error,
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid seed document `{}`: {}", self.document, self.source)
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

pub type SeedResult<T> = Result<T, SeedError>;

pub fn load_projects() -> SeedResult<Vec<Project>> {
    decode("projects", PROJECTS_JSON)
}

pub fn load_blog_posts() -> SeedResult<Vec<BlogPost>> {
    decode("blog", BLOG_POSTS_JSON)
}

pub fn load_profile() -> SeedResult<Profile> {
    decode("profile", PROFILE_JSON)
}

fn decode<T: DeserializeOwned>(document: &'static str, raw: &str) -> SeedResult<T> {
    let value = serde_json::from_str(raw).map_err(|source| SeedError { document, source })?;
    info!("event=seed_load module=seed status=ok document={document}");
    Ok(value)
}
