use related_fs::{ConfigStore, NormalizedPath};
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct TestSettings {
    enabled_configurations: Vec<String>,
}

fn load_from(name: &str, content: &str) -> related_fs::Result<TestSettings> {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join(name);
    fs::write(&file_path, content).unwrap();
    ConfigStore::new().load(&NormalizedPath::new(&file_path))
}

#[test]
fn test_load_toml() {
    let settings = load_from("settings.toml", r#"enabled_configurations = ["py", "js"]"#).unwrap();
    assert_eq!(settings.enabled_configurations, vec!["py", "js"]);
}

#[test]
fn test_load_json() {
    let settings = load_from("settings.json", r#"{"enabled_configurations": ["php"]}"#).unwrap();
    assert_eq!(settings.enabled_configurations, vec!["php"]);
}

#[test]
fn test_load_sublime_settings_as_json() {
    let settings = load_from(
        "GotoRelatedFile.sublime-settings",
        r#"{"enabled_configurations": ["rails"]}"#,
    )
    .unwrap();
    assert_eq!(settings.enabled_configurations, vec!["rails"]);
}

#[test]
fn test_load_sublime_settings_with_comments_and_trailing_commas() {
    let settings = load_from(
        "GotoRelatedFile.sublime-settings",
        r#"{
    // Checked in order.
    "enabled_configurations": [
        "rails",
        "kohana", // legacy
    ],
}"#,
    )
    .unwrap();
    assert_eq!(settings.enabled_configurations, vec!["rails", "kohana"]);
}

#[test]
fn test_plain_json_rejects_comments() {
    let err = load_from("settings.json", "{\n// no\n\"enabled_configurations\": []\n}").unwrap_err();
    assert!(err.to_string().contains("JSON"));
}

#[test]
fn test_load_yaml() {
    let settings = load_from("settings.yml", "enabled_configurations:\n  - py\n").unwrap();
    assert_eq!(settings.enabled_configurations, vec!["py"]);
}

#[test]
fn test_unsupported_format() {
    let result = load_from("settings.xyz", "data");
    assert!(matches!(
        result,
        Err(related_fs::Error::UnsupportedFormat { ref extension }) if extension == "xyz"
    ));
}

#[test]
fn test_parse_error_names_format() {
    let err = load_from("settings.toml", "enabled_configurations = [").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("TOML"), "unexpected message: {message}");
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("missing.toml"));
    let result: related_fs::Result<TestSettings> = ConfigStore::new().load(&path);
    assert!(matches!(result, Err(related_fs::Error::Io { .. })));
}
