//! Generic record store: CRUD, error capture and simulated fetch.
//!
//! # Responsibility
//! - Wrap a record repository with the store contract shared by every
//!   content domain.
//! - Capture the last failure in an error field the UI can poll.
//! - Simulate a network round-trip with a loading flag.
//!
//! # Invariants
//! - Every failing operation returns its error and also records it.
//! - Every successful mutation clears the recorded error.
//! - `fetch_all` always leaves `is_loading() == false` when it returns.

use crate::model::{Record, RecordValidationError};
use crate::repo::record_repo::{MemoryRecordRepository, RecordRepository, RepoError, RepoResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;
use std::time::{Duration, Instant};

/// Failure of the simulated fetch. Carries a message only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "fetch failed: {}", self.message)
    }
}

impl Error for FetchError {}

/// Store-level error, as recorded in the store's error field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(RecordValidationError),
    DuplicateId(String),
    DuplicateSlug(String),
    NotFound(String),
    Fetch(FetchError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "record with id `{id}` already exists"),
            Self::DuplicateSlug(slug) => write!(f, "record with slug `{slug}` already exists"),
            Self::NotFound(id) => write!(f, "record with id `{id}` not found"),
            Self::Fetch(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Fetch(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::DuplicateId(id) => Self::DuplicateId(id),
            RepoError::DuplicateSlug(slug) => Self::DuplicateSlug(slug),
            RepoError::NotFound(id) => Self::NotFound(id),
        }
    }
}

impl From<FetchError> for StoreError {
    fn from(value: FetchError) -> Self {
        Self::Fetch(value)
    }
}

/// Stand-in for a remote fetch: waits `delay`, bounded by `timeout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedFetch {
    pub delay: Duration,
    pub timeout: Duration,
}

impl SimulatedFetch {
    pub fn new(delay: Duration, timeout: Duration) -> Self {
        Self { delay, timeout }
    }

    /// Zero-delay fetch with a generous timeout.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO, Duration::from_secs(5))
    }

    /// Resolves with no observable change after the configured delay.
    ///
    /// # Errors
    /// - Returns `FetchError` when the delay exceeds the timeout.
    pub async fn run(&self) -> Result<(), FetchError> {
        tokio::time::timeout(self.timeout, tokio::time::sleep(self.delay))
            .await
            .map_err(|_| {
                FetchError::new(format!(
                    "no response within {} ms",
                    self.timeout.as_millis()
                ))
            })
    }
}

impl Default for SimulatedFetch {
    fn default() -> Self {
        Self::immediate()
    }
}

/// Loading flag and last recorded error of one store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStatus {
    loading: bool,
    error: Option<StoreError>,
}

impl StoreStatus {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&StoreError> {
        self.error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Records `error` for `operation` and hands it back to the caller.
    pub fn fail(
        &mut self,
        kind: &'static str,
        operation: &'static str,
        id: &str,
        error: StoreError,
    ) -> StoreError {
        warn!(
            "event=store_{operation} module=store status=error kind={kind} id={id} error={error}"
        );
        self.error = Some(error.clone());
        error
    }

    /// Runs `fetch` with the loading flag raised for its whole duration.
    pub async fn run_fetch(
        &mut self,
        kind: &'static str,
        fetch: &SimulatedFetch,
    ) -> Result<(), StoreError> {
        self.loading = true;
        self.error = None;
        let started_at = Instant::now();
        info!("event=store_fetch module=store status=start kind={kind}");

        let outcome = fetch.run().await.map_err(StoreError::from);
        self.loading = false;

        match outcome {
            Ok(()) => {
                info!(
                    "event=store_fetch module=store status=ok kind={kind} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => Err(self.fail(kind, "fetch", "*", err)),
        }
    }
}

/// Store facade over one record repository.
pub struct RecordStore<R, P = MemoryRecordRepository<R>>
where
    R: Record,
    P: RecordRepository<R>,
{
    repo: P,
    status: StoreStatus,
    fetch: SimulatedFetch,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> RecordStore<R> {
    /// Builds an in-memory store from seed records.
    pub fn from_records(
        records: impl IntoIterator<Item = R>,
        fetch: SimulatedFetch,
    ) -> RepoResult<Self> {
        Ok(Self::new(MemoryRecordRepository::from_records(records)?, fetch))
    }
}

impl<R, P> RecordStore<R, P>
where
    R: Record,
    P: RecordRepository<R>,
{
    pub fn new(repo: P, fetch: SimulatedFetch) -> Self {
        Self {
            repo,
            status: StoreStatus::default(),
            fetch,
            _record: PhantomData,
        }
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[R] {
        self.repo.list()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&R> {
        self.repo.get(id)
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<&R> {
        self.repo.find_by_slug(slug)
    }

    pub fn total_count(&self) -> usize {
        self.repo.list().len()
    }

    /// Appends a record.
    ///
    /// # Errors
    /// - `Validation` when id or title/name is blank.
    /// - `DuplicateId` / `DuplicateSlug` when identity is already taken.
    pub fn add(&mut self, record: R) -> Result<(), StoreError> {
        let id = record.id().to_string();
        match self.repo.insert(record) {
            Ok(()) => {
                self.status.clear_error();
                info!(
                    "event=store_add module=store status=ok kind={} id={id}",
                    R::KIND
                );
                Ok(())
            }
            Err(err) => Err(self.status.fail(R::KIND, "add", &id, err.into())),
        }
    }

    /// Merges `patch` into the record with `id`. The id itself never changes.
    ///
    /// # Errors
    /// - `NotFound` when no record has `id`.
    /// - `Validation` / `DuplicateSlug` when the merged record is invalid.
    pub fn update(&mut self, id: &str, patch: R::Patch) -> Result<&R, StoreError> {
        match self.repo.update(id, patch) {
            Ok(record) => {
                self.status.clear_error();
                info!(
                    "event=store_update module=store status=ok kind={} id={id}",
                    R::KIND
                );
                Ok(record)
            }
            Err(err) => Err(self.status.fail(R::KIND, "update", id, err.into())),
        }
    }

    /// Removes and returns the record with `id`.
    pub fn remove(&mut self, id: &str) -> Result<R, StoreError> {
        match self.repo.remove(id) {
            Ok(record) => {
                self.status.clear_error();
                info!(
                    "event=store_remove module=store status=ok kind={} id={id}",
                    R::KIND
                );
                Ok(record)
            }
            Err(err) => Err(self.status.fail(R::KIND, "remove", id, err.into())),
        }
    }

    /// Simulated reload; the record set is left unchanged.
    pub async fn fetch_all(&mut self) -> Result<(), StoreError> {
        self.status.run_fetch(R::KIND, &self.fetch).await
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error(&self) -> Option<&StoreError> {
        self.status.error()
    }

    pub fn clear_error(&mut self) {
        self.status.clear_error();
    }

    pub fn fetch_settings(&self) -> SimulatedFetch {
        self.fetch
    }
}
