//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repositories and the query engine into use-case APIs.
//! - Keep CLI/UI layers decoupled from storage details.

pub mod blog_service;
pub mod profile_service;
pub mod project_service;
pub mod store;
pub mod theme_service;
