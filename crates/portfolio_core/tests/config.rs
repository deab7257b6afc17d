use portfolio_core::{default_database_path, ConfigError, FetchConfig, PortfolioConfig};
use std::io::Write;
use std::time::Duration;

#[test]
fn empty_document_uses_defaults() {
    let config = PortfolioConfig::from_toml_str("").unwrap();

    assert_eq!(config, PortfolioConfig::default());
    assert_eq!(config.fetch, FetchConfig::default());
    assert_eq!(config.fetch.projects().delay, Duration::from_millis(800));
    assert_eq!(config.fetch.blog().delay, Duration::from_millis(500));
    assert_eq!(config.fetch.profile().timeout, Duration::from_secs(5));
}

#[test]
fn partial_document_overrides_only_given_fields() {
    let config = PortfolioConfig::from_toml_str(
        r#"
log_level = "warn"

[fetch]
blog_delay_ms = 50
"#,
    )
    .unwrap();

    assert_eq!(config.log_level, "warn");
    assert_eq!(config.fetch.blog_delay_ms, 50);
    assert_eq!(config.fetch.projects_delay_ms, 800);
    assert!(config.database_path.is_none());
}

#[test]
fn without_delay_keeps_timeout() {
    let fetch = FetchConfig {
        timeout_ms: 1_234,
        ..FetchConfig::default()
    }
    .without_delay();

    assert_eq!(fetch.projects().delay, Duration::ZERO);
    assert_eq!(fetch.profile().timeout, Duration::from_millis(1_234));
}

#[test]
fn invalid_values_are_rejected() {
    assert!(matches!(
        PortfolioConfig::from_toml_str(r#"log_level = "loud""#),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        PortfolioConfig::from_toml_str("[fetch]\ntimeout_ms = 0"),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        PortfolioConfig::from_toml_str(r#"log_dir = "relative/logs""#),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        PortfolioConfig::from_toml_str("log_level = ["),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn load_reads_file_and_reports_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "database_path = \"prefs.sqlite3\"").unwrap();

    let config = PortfolioConfig::load(&path).unwrap();
    assert_eq!(
        config.database_path.as_deref(),
        Some(std::path::Path::new("prefs.sqlite3"))
    );

    let missing = PortfolioConfig::load(dir.path().join("missing.toml"));
    assert!(matches!(missing, Err(ConfigError::Read { .. })));
}

#[test]
fn preferences_default_to_a_file_in_the_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("PORTFOLIO_DATA_DIR", dir.path());

    let expected = dir.path().join("preferences.sqlite3");
    assert_eq!(default_database_path(), Some(expected.clone()));
    assert_eq!(PortfolioConfig::default().preferences_path(), Some(expected));

    let configured = PortfolioConfig {
        database_path: Some("custom.sqlite3".into()),
        ..PortfolioConfig::default()
    };
    assert_eq!(
        configured.preferences_path().as_deref(),
        Some(std::path::Path::new("custom.sqlite3"))
    );
    std::env::remove_var("PORTFOLIO_DATA_DIR");
}
