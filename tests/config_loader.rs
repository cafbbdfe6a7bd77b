use std::io::Write;

use gameshell::config::{Config, ConfigError};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn default_values() {
    let config = Config::default();
    assert_eq!(config.start_path, "/");
    assert_eq!(config.tick_rate_ms, 250);
    assert!(config.player_name.is_none());
}

#[test]
fn config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("gameshell/config.toml"));
}

#[test]
fn missing_file_yields_defaults() {
    let config = Config::load_from("/nonexistent/gameshell/config.toml".as_ref())
        .expect("missing file is not an error");
    assert_eq!(config.start_path, "/");
}

#[test]
fn full_file_parses() {
    let file = write_config(
        r#"
start_path = "/game"
tick_rate_ms = 100
player_name = "Ada"
"#,
    );
    let config = Config::load_from(file.path()).expect("valid config");
    assert_eq!(config.start_path, "/game");
    assert_eq!(config.tick_rate_ms, 100);
    assert_eq!(config.player_name.as_deref(), Some("Ada"));
}

#[test]
fn partial_file_fills_in_defaults() {
    let file = write_config(r#"player_name = "Ada""#);
    let config = Config::load_from(file.path()).expect("valid config");
    assert_eq!(config.start_path, "/");
    assert_eq!(config.tick_rate_ms, 250);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_config("start_path = [broken");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn relative_start_path_fails_validation() {
    let file = write_config(r#"start_path = "game""#);
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Validation { .. }));
}

#[test]
fn zero_tick_rate_fails_validation() {
    let file = write_config("tick_rate_ms = 0");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Validation { .. }));
}
