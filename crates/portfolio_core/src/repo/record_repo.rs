//! Record repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold one ordered record set per content domain.
//! - Enforce identity invariants (`id`, `slug`) on every write.
//!
//! # Invariants
//! - Write paths call `Record::validate()` before mutating.
//! - A failed write leaves the record set untouched.
//! - Listing order is insertion order; removal preserves relative order.

use crate::model::{Record, RecordValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record set writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(RecordValidationError),
    DuplicateId(String),
    DuplicateSlug(String),
    NotFound(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "record with id `{id}` already exists"),
            Self::DuplicateSlug(slug) => write!(f, "record with slug `{slug}` already exists"),
            Self::NotFound(id) => write!(f, "record with id `{id}` not found"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RecordValidationError> for RepoError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for one record set.
pub trait RecordRepository<R: Record> {
    /// All records in insertion order.
    fn list(&self) -> &[R];
    fn get(&self, id: &str) -> Option<&R>;
    fn find_by_slug(&self, slug: &str) -> Option<&R>;
    /// Appends one record after validation and identity checks.
    fn insert(&mut self, record: R) -> RepoResult<()>;
    /// Merges `patch` into the record with `id` and returns the result.
    fn update(&mut self, id: &str, patch: R::Patch) -> RepoResult<&R>;
    /// Removes the record with `id` and returns it.
    fn remove(&mut self, id: &str) -> RepoResult<R>;
}

/// `Vec`-backed record set.
#[derive(Debug, Clone)]
pub struct MemoryRecordRepository<R> {
    records: Vec<R>,
}

impl<R> Default for MemoryRecordRepository<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> MemoryRecordRepository<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository from seed records, applying the same checks as
    /// `insert` to each one in order.
    pub fn from_records(records: impl IntoIterator<Item = R>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for record in records {
            repo.insert(record)?;
        }
        Ok(repo)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    fn slug_taken(&self, slug: &str, except_index: Option<usize>) -> bool {
        self.records
            .iter()
            .enumerate()
            .any(|(index, record)| Some(index) != except_index && record.slug() == Some(slug))
    }
}

impl<R: Record> RecordRepository<R> for MemoryRecordRepository<R> {
    fn list(&self) -> &[R] {
        &self.records
    }

    fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    fn find_by_slug(&self, slug: &str) -> Option<&R> {
        self.records
            .iter()
            .find(|record| record.slug() == Some(slug))
    }

    fn insert(&mut self, record: R) -> RepoResult<()> {
        record.validate()?;

        if self.position(record.id()).is_some() {
            return Err(RepoError::DuplicateId(record.id().to_string()));
        }
        if let Some(slug) = record.slug() {
            if self.slug_taken(slug, None) {
                return Err(RepoError::DuplicateSlug(slug.to_string()));
            }
        }

        self.records.push(record);
        Ok(())
    }

    fn update(&mut self, id: &str, patch: R::Patch) -> RepoResult<&R> {
        let index = self
            .position(id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;

        let mut candidate = self.records[index].clone();
        candidate.apply_patch(patch);
        candidate.validate()?;
        if let Some(slug) = candidate.slug() {
            if self.slug_taken(slug, Some(index)) {
                return Err(RepoError::DuplicateSlug(slug.to_string()));
            }
        }

        self.records[index] = candidate;
        Ok(&self.records[index])
    }

    fn remove(&mut self, id: &str) -> RepoResult<R> {
        let index = self
            .position(id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;
        Ok(self.records.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryRecordRepository, RecordRepository, RepoError};
    use crate::model::blog::{BlogPost, BlogPostPatch};

    fn post(id: &str, slug: &str) -> BlogPost {
        BlogPost::with_id(id, format!("post {id}"), slug, "2025-01-01")
    }

    #[test]
    fn from_records_rejects_duplicate_seed_slugs() {
        let err = MemoryRecordRepository::from_records(vec![post("1", "same"), post("2", "same")])
            .unwrap_err();
        assert_eq!(err, RepoError::DuplicateSlug("same".to_string()));
    }

    #[test]
    fn update_to_taken_slug_leaves_record_untouched() {
        let mut repo =
            MemoryRecordRepository::from_records(vec![post("1", "first"), post("2", "second")])
                .unwrap();

        let patch = BlogPostPatch {
            slug: Some("first".to_string()),
            title: Some("renamed".to_string()),
            ..BlogPostPatch::default()
        };
        let err = repo.update("2", patch).unwrap_err();

        assert_eq!(err, RepoError::DuplicateSlug("first".to_string()));
        assert_eq!(repo.get("2").unwrap().title, "post 2");
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut repo = MemoryRecordRepository::from_records(vec![
            post("1", "a"),
            post("2", "b"),
            post("3", "c"),
        ])
        .unwrap();

        repo.remove("2").unwrap();
        let ids: Vec<&str> = repo.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
