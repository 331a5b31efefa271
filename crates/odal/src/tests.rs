use std::fs;
use std::path::Path;

use tempfile::tempdir;
use toml::Table;

use crate::{Config, Error, merge_tables};

use serde::Deserialize;

// Test configurations for our unit tests
#[derive(Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
struct TestConfig {
    string_value: String,
    int_value: i32,
    nested: NestedConfig,
}

#[derive(Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
struct NestedConfig {
    setting_a: String,
    setting_b: i32,
    flag: Option<bool>,
}

impl Config for TestConfig {
    const PATH: &'static str = "test_config.toml";
}

const MAIN_CONFIG: &str = r#"
string_value = "original"
int_value = 42

[nested]
setting_a = "hello"
setting_b = 100
"#;

fn write_config(dir: &Path, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(TestConfig::PATH), content).unwrap();
}

#[test]
fn test_load() {
    let temp_dir = tempdir().unwrap();
    write_config(temp_dir.path(), MAIN_CONFIG);

    let config = TestConfig::load(temp_dir.path()).unwrap();

    assert_eq!(config.string_value, "original");
    assert_eq!(config.int_value, 42);
    assert_eq!(config.nested.setting_a, "hello");
    assert_eq!(config.nested.setting_b, 100);
    assert_eq!(config.nested.flag, None);
}

#[test]
fn test_load_with_overlay() {
    let temp_dir = tempdir().unwrap();
    let config_dir = temp_dir.path().join("config");
    let overlay_dir = temp_dir.path().join("config/overlay/camera_rig");

    write_config(&config_dir, MAIN_CONFIG);
    write_config(
        &overlay_dir,
        r#"
int_value = 7

[nested]
setting_b = 200
flag = true
"#,
    );

    let config = TestConfig::load_with_overlay(&config_dir, &overlay_dir).unwrap();

    // untouched values come from the main config
    assert_eq!(config.string_value, "original");
    assert_eq!(config.nested.setting_a, "hello");

    assert_eq!(config.int_value, 7);
    assert_eq!(config.nested.setting_b, 200);
    assert_eq!(config.nested.flag, Some(true));
}

#[test]
fn test_missing_overlay_falls_back_to_main() {
    let temp_dir = tempdir().unwrap();
    write_config(temp_dir.path(), MAIN_CONFIG);

    let config =
        TestConfig::load_with_overlay(temp_dir.path(), temp_dir.path().join("does_not_exist"))
            .unwrap();

    assert_eq!(config, TestConfig::load(temp_dir.path()).unwrap());
}

#[test]
fn test_missing_config_reports_path() {
    let temp_dir = tempdir().unwrap();

    match TestConfig::load(temp_dir.path()) {
        Err(Error::Read { path, .. }) => assert!(path.ends_with(TestConfig::PATH)),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn test_invalid_config_is_rejected() {
    let temp_dir = tempdir().unwrap();
    write_config(temp_dir.path(), &format!("{MAIN_CONFIG}\nunknown_key = 1"));

    assert!(matches!(
        TestConfig::load(temp_dir.path()),
        Err(Error::Deserialize(_))
    ));
}

#[test]
fn test_merge_tables() {
    let main: Table = r#"
        replaced = 1
        kept = "yes"

        [table]
        inner = 1
        other = 2
    "#
    .parse()
    .unwrap();

    let overlay: Table = r#"
        replaced = 2
        added = [1, 2]

        [table]
        other = 3
    "#
    .parse()
    .unwrap();

    let merged = merge_tables(main, overlay);

    assert_eq!(merged["replaced"].as_integer(), Some(2));
    assert_eq!(merged["kept"].as_str(), Some("yes"));
    assert_eq!(merged["added"].as_array().map(Vec::len), Some(2));

    let table = merged["table"].as_table().unwrap();
    assert_eq!(table["inner"].as_integer(), Some(1));
    assert_eq!(table["other"].as_integer(), Some(3));
}
