//! Repository layer abstractions and implementations.
//!
//! # Responsibility
//! - Define data access contracts for record sets and preferences.
//! - Keep storage details away from service orchestration.
//!
//! # Invariants
//! - Record writes enforce `Record::validate()` before mutation.
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`)
//!   rather than sentinel values.

pub mod preference_repo;
pub mod record_repo;
