use alm_cli::config::{Config, ConfigError};
use alm_nav::ArgumentPolicy;
use std::io::Write;

#[test]
fn default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.general.log_level, "warn");
    assert!(!cfg.general.json_logs);
    assert_eq!(cfg.navigation.start_route, "calendar");
    assert_eq!(cfg.navigation.argument_policy, ArgumentPolicy::Lenient);
    cfg.validate().expect("default validates");
}

#[test]
fn config_partial_toml() {
    let partial = r#"
[navigation]
start_route = "sprints"
argument_policy = "strict"
"#;
    let cfg: Config = toml::from_str(partial).expect("parse partial");
    assert_eq!(cfg.navigation.start_route, "sprints");
    assert_eq!(cfg.navigation.argument_policy, ArgumentPolicy::Strict);
    // defaults should fill in the rest
    assert_eq!(cfg.general.log_level, "warn");
    cfg.validate().expect("config validates");
}

#[test]
fn config_roundtrip() {
    let mut cfg = Config::default();
    cfg.navigation.start_route = "settings".into();
    let toml_str = cfg.to_toml().expect("serialize to toml");
    assert!(toml_str.contains("settings"));

    let parsed: Config = toml::from_str(&toml_str).expect("parse toml back");
    assert_eq!(parsed.navigation.start_route, "settings");
    assert_eq!(parsed.navigation.argument_policy, ArgumentPolicy::Lenient);
}

#[test]
fn unknown_start_route_fails_validation() {
    let mut cfg = Config::default();
    cfg.navigation.start_route = "nowhere".into();
    let err = cfg.validate().expect_err("validation should fail");
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("start_route"));
}

#[test]
fn parameterised_start_route_fails_validation() {
    let mut cfg = Config::default();
    cfg.navigation.start_route = "taskDetail".into();
    let err = cfg.validate().expect_err("validation should fail");
    assert!(err.to_string().contains("requires an argument"));
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[general]\nlog_level = \"debug\"\njson_logs = true").unwrap();
    let cfg = Config::load_from(file.path()).expect("load");
    assert_eq!(cfg.general.log_level, "debug");
    assert!(cfg.general.json_logs);
    assert_eq!(cfg.navigation.start_route, "calendar");
}

#[test]
fn load_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from(dir.path().join("absent.toml")).expect_err("missing");
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn load_from_garbage_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "navigation = [[[").unwrap();
    let err = Config::load_from(file.path()).expect_err("garbage");
    assert!(matches!(err, ConfigError::Parse(_)));
}
