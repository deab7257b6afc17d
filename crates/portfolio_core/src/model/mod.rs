//! Domain model for portfolio content.
//!
//! # Responsibility
//! - Define the canonical records held by the content stores.
//! - Define the `Record` contract shared by every store-managed type.
//!
//! # Invariants
//! - Every record is identified by a non-blank string `id`.
//! - Optional fields are resolved to empty defaults at decode/construction
//!   time, never in consuming code.

pub mod blog;
pub mod date;
pub mod profile;
pub mod project;

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Validation failure for a record entering a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// `id` is empty after trim.
    BlankId,
    /// Human-facing name field is empty after trim.
    BlankName { field: &'static str },
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "record id must not be blank"),
            Self::BlankName { field } => write!(f, "record {field} must not be blank"),
        }
    }
}

impl Error for RecordValidationError {}

/// Contract for records managed by a `RecordStore`.
///
/// # Invariants
/// - `id()` never changes across `apply_patch`; patch types carry no id.
/// - `slug()` returns `None` for record kinds without slug identity.
pub trait Record: Clone {
    /// Partial update merged by `apply_patch`.
    type Patch;

    /// Stable kind label used in log events.
    const KIND: &'static str;

    /// Name of the field reported by `RecordValidationError::BlankName`.
    const NAME_FIELD: &'static str = "title";

    fn id(&self) -> &str;

    fn slug(&self) -> Option<&str> {
        None
    }

    /// Title or name shown in listings.
    fn display_name(&self) -> &str;

    /// Merges every `Some` field of `patch` into `self`.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Checks the fields required before a record may enter a store.
    fn validate(&self) -> Result<(), RecordValidationError> {
        if self.id().trim().is_empty() {
            return Err(RecordValidationError::BlankId);
        }
        if self.display_name().trim().is_empty() {
            return Err(RecordValidationError::BlankName {
                field: Self::NAME_FIELD,
            });
        }
        Ok(())
    }
}

/// Generates a fresh record id for locally created records.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

pub(crate) fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
