//! Project catalog use-cases.
//!
//! # Responsibility
//! - Pair the project store with the session's query state.
//! - Expose derived views: filtered list, featured, groupings, facets.
//!
//! # Invariants
//! - Derived views are recomputed on every call from store + query state.
//! - Groupings operate on the filtered view, so flattening them yields
//!   exactly `filtered()`.

use crate::model::project::{Project, ProjectCategory, StackDimension};
use crate::query::filter::{apply_query, QueryState};
use crate::query::group::{distinct_values, group_by, group_by_category, group_by_year};
use crate::repo::record_repo::RepoResult;
use crate::service::store::{RecordStore, SimulatedFetch};
use std::collections::BTreeMap;

/// Bucket label for projects without a status.
pub const UNSPECIFIED_STATUS: &str = "unspecified";

/// Project store plus per-session query state.
pub struct ProjectCatalog {
    store: RecordStore<Project>,
    query: QueryState,
}

impl ProjectCatalog {
    pub fn new(store: RecordStore<Project>) -> Self {
        Self {
            store,
            query: QueryState::default(),
        }
    }

    pub fn from_records(records: Vec<Project>, fetch: SimulatedFetch) -> RepoResult<Self> {
        Ok(Self::new(RecordStore::from_records(records, fetch)?))
    }

    pub fn store(&self) -> &RecordStore<Project> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore<Project> {
        &mut self.store
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut QueryState {
        &mut self.query
    }

    /// Search → tag/category → sort view over all projects.
    pub fn filtered(&self) -> Vec<&Project> {
        apply_query(self.store.list(), &self.query)
    }

    pub fn featured(&self) -> Vec<&Project> {
        self.store
            .list()
            .iter()
            .filter(|project| project.featured)
            .collect()
    }

    pub fn by_category(&self, category: ProjectCategory) -> Vec<&Project> {
        self.store
            .list()
            .iter()
            .filter(|project| project.category == category)
            .collect()
    }

    /// Projects whose stack mentions `technology`, ignoring case.
    pub fn by_technology(&self, technology: &str) -> Vec<&Project> {
        let needle = technology.trim().to_lowercase();
        self.store
            .list()
            .iter()
            .filter(|project| {
                project
                    .stack
                    .entries()
                    .any(|entry| entry.to_lowercase() == needle)
            })
            .collect()
    }

    pub fn group_by_category(&self) -> BTreeMap<String, Vec<&Project>> {
        group_by_category(self.filtered())
    }

    pub fn group_by_year(&self) -> BTreeMap<String, Vec<&Project>> {
        group_by_year(self.filtered())
    }

    pub fn group_by_status(&self) -> BTreeMap<String, Vec<&Project>> {
        group_by(self.filtered(), |project: &Project| {
            project
                .status
                .map_or(UNSPECIFIED_STATUS, |status| status.as_str())
                .to_string()
        })
    }

    /// Free-text tags across all projects.
    pub fn distinct_tags(&self) -> Vec<String> {
        distinct_values(
            self.store
                .list()
                .iter()
                .flat_map(|project| project.tags.iter().map(String::as_str)),
        )
    }

    /// Stack entries across all projects, for one dimension or all of them.
    pub fn distinct_stack_values(&self, dimension: Option<StackDimension>) -> Vec<String> {
        let projects = self.store.list();
        match dimension {
            Some(dimension) => distinct_values(projects.iter().flat_map(|project| {
                project.stack.dimension(dimension).iter().map(String::as_str)
            })),
            None => distinct_values(projects.iter().flat_map(|project| project.stack.entries())),
        }
    }

    pub fn total_count(&self) -> usize {
        self.store.total_count()
    }
}
