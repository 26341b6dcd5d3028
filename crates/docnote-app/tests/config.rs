use docnote_app::config::{
    CURRENT_VERSION, DocnoteConfig, LogFormat, load_config_at, migrate, save_config_at,
};
use serde_json::json;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = load_config_at(&dir.path().join("config.json")).unwrap();
    assert_eq!(loaded.migrated_from, None);
    let config = loaded.config;
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.trainer_name, "Athletic Trainer");
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = DocnoteConfig {
        trainer_name: "Coach Carter".to_string(),
        log_format: LogFormat::Json,
        ..DocnoteConfig::default()
    };

    let path = save_config_at(dir.path(), &config).unwrap();
    assert_eq!(path, dir.path().join("config.json"));
    assert!(!dir.path().join("config.json.tmp").exists());

    let loaded = load_config_at(&path).unwrap();
    assert_eq!(loaded.config, config);
    assert_eq!(loaded.migrated_from, None);
}

#[cfg(unix)]
#[test]
fn saved_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = save_config_at(dir.path(), &DocnoteConfig::default()).unwrap();
    let mode = std::fs::metadata(path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn unversioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"trainer_name":"Pat","created_at":"2024-03-01T12:00:00Z"}"#,
    )
    .unwrap();

    let loaded = load_config_at(&path).unwrap();
    assert_eq!(loaded.migrated_from, Some(0));
    let config = loaded.config;
    assert_eq!(config.config_version, 1);
    assert_eq!(config.trainer_name, "Pat");
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn migrate_keeps_existing_log_format() {
    let migrated = migrate(json!({ "log_format": "json" }), 0).unwrap();
    assert_eq!(migrated["log_format"], "json");
    assert_eq!(migrated["config_version"], 1);
}

#[test]
fn newer_version_is_rejected() {
    let err = migrate(json!({ "config_version": 9 }), 9).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_is_rejected() {
    assert!(migrate(json!([1, 2, 3]), 0).is_err());
}

#[test]
fn migrated_config_saves_at_current_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"trainer_name":"Pat","created_at":"2024-03-01T12:00:00Z"}"#,
    )
    .unwrap();

    let loaded = load_config_at(&path).unwrap();
    save_config_at(dir.path(), &loaded.config).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["config_version"], CURRENT_VERSION);
    assert_eq!(raw["log_format"], "pretty");
    assert_eq!(load_config_at(&path).unwrap().migrated_from, None);
}
