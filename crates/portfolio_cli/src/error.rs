use portfolio_core::{ConfigError, ContextError, LoggingError, PreferenceError, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Debug)]
pub enum CliError {
    Config(ConfigError),
    Logging(LoggingError),
    Context(ContextError),
    Preference(PreferenceError),
    Store(StoreError),
    Render(serde_json::Error),
    /// Lookup by id/slug found nothing.
    NotFound { kind: &'static str, key: String },
    PreferenceDir { path: PathBuf, source: std::io::Error },
    /// No preference file could be resolved; changes would be lost on exit.
    PreferencesUnavailable,
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "{err}"),
            Self::Context(err) => write!(f, "{err}"),
            Self::Preference(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Render(err) => write!(f, "failed to render output: {err}"),
            Self::NotFound { kind, key } => write!(f, "no {kind} matches `{key}`"),
            Self::PreferenceDir { path, source } => write!(
                f,
                "failed to create preference directory `{}`: {source}",
                path.display()
            ),
            Self::PreferencesUnavailable => write!(
                f,
                "no preference database available; pass --db or set database_path"
            ),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Logging(err) => Some(err),
            Self::Context(err) => Some(err),
            Self::Preference(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::PreferenceDir { source, .. } => Some(source),
            Self::NotFound { .. } | Self::PreferencesUnavailable => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<ContextError> for CliError {
    fn from(value: ContextError) -> Self {
        Self::Context(value)
    }
}

impl From<PreferenceError> for CliError {
    fn from(value: PreferenceError) -> Self {
        Self::Preference(value)
    }
}

impl From<StoreError> for CliError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
