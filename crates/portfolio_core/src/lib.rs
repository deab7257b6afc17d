//! Core content logic for the portfolio.
//! This crate owns the record stores, the query engine and every invariant
//! the CLI relies on.

pub mod config;
pub mod context;
pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod routes;
pub mod seed;
pub mod service;

pub use config::{default_database_path, ConfigError, FetchConfig, PortfolioConfig};
pub use context::{AppContext, ContextError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::blog::BlogPost;
pub use model::profile::{Profile, Skill, TimelineEvent};
pub use model::project::{Project, ProjectCategory, ProjectStatus, StackDimension};
pub use model::{Record, RecordValidationError};
pub use query::filter::{QueryState, SortKey};
pub use repo::preference_repo::{
    MemoryPreferenceRepository, PreferenceError, PreferenceRepository, SqlitePreferenceRepository,
};
pub use repo::record_repo::{MemoryRecordRepository, RecordRepository, RepoError, RepoResult};
pub use routes::{Route, RouteMatch, RouteTable};
pub use service::store::{FetchError, RecordStore, SimulatedFetch, StoreError};
pub use service::theme_service::{ThemeMode, ThemeService};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
