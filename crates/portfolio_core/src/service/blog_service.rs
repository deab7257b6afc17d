//! Blog catalog use-cases.
//!
//! # Invariants
//! - `filtered()` and `latest()` order by `published_at`, newest first,
//!   unless the query state selects another sort.
//! - Tag lookups are exact (case-sensitive); search is case-insensitive.

use crate::model::blog::BlogPost;
use crate::query::filter::{apply_query, sort_view, QueryState, SortKey};
use crate::query::group::distinct_filter_values;
use crate::repo::record_repo::RepoResult;
use crate::service::store::{RecordStore, SimulatedFetch};

/// Blog post store plus per-session query state.
pub struct BlogCatalog {
    store: RecordStore<BlogPost>,
    query: QueryState,
}

impl BlogCatalog {
    pub fn new(store: RecordStore<BlogPost>) -> Self {
        Self {
            store,
            query: QueryState::default(),
        }
    }

    pub fn from_records(records: Vec<BlogPost>, fetch: SimulatedFetch) -> RepoResult<Self> {
        Ok(Self::new(RecordStore::from_records(records, fetch)?))
    }

    pub fn store(&self) -> &RecordStore<BlogPost> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore<BlogPost> {
        &mut self.store
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut QueryState {
        &mut self.query
    }

    pub fn filtered(&self) -> Vec<&BlogPost> {
        apply_query(self.store.list(), &self.query)
    }

    pub fn featured(&self) -> Vec<&BlogPost> {
        self.store.list().iter().filter(|post| post.featured).collect()
    }

    /// Every post, newest first, ignoring the query state.
    pub fn latest(&self) -> Vec<&BlogPost> {
        let mut posts: Vec<&BlogPost> = self.store.list().iter().collect();
        sort_view(&mut posts, SortKey::Latest);
        posts
    }

    pub fn by_tag(&self, tag: &str) -> Vec<&BlogPost> {
        self.store
            .list()
            .iter()
            .filter(|post| post.tags.iter().any(|value| value == tag))
            .collect()
    }

    /// Unique tags across all posts, sorted.
    pub fn all_tags(&self) -> Vec<String> {
        distinct_filter_values(self.store.list())
    }

    pub fn total_count(&self) -> usize {
        self.store.total_count()
    }
}
