use rstudents::config::Config;
use rstudents::config::migrate::{migrate_config_file, missing_fields};
use std::fs;

mod common;
use common::temp_dir;

#[test]
fn test_missing_file_loads_defaults() {
    let dir = temp_dir("config_defaults");
    let cfg = Config::load_from(&dir.join("absent.conf")).expect("load");

    assert_eq!(cfg.separator_char, "-");
    assert_eq!(cfg.grade_decimals, 2);
    assert!(cfg.confirm_delete);
    assert!(cfg.database.ends_with("rstudents.sqlite"));
}

#[test]
fn test_partial_file_uses_serde_defaults() {
    let dir = temp_dir("config_partial");
    let path = dir.join("rstudents.conf");
    fs::write(&path, "database: /data/students.sqlite\ngrade_decimals: 1\n").expect("write");

    let cfg = Config::load_from(&path).expect("load");
    assert_eq!(cfg.database, "/data/students.sqlite");
    assert_eq!(cfg.grade_decimals, 1);
    assert!(cfg.confirm_delete);
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let dir = temp_dir("config_invalid");
    let path = dir.join("rstudents.conf");
    fs::write(&path, "database: [unclosed\n").expect("write");

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_check_and_migrate_fill_missing_fields() {
    let dir = temp_dir("config_migrate");
    let path = dir.join("rstudents.conf");
    fs::write(&path, "database: /data/students.sqlite\nconfirm_delete: false\n").expect("write");

    let mut missing = missing_fields(&path).expect("check");
    missing.sort();
    assert_eq!(missing, vec!["grade_decimals", "separator_char"]);

    assert!(migrate_config_file(&path).expect("migrate"));
    assert!(missing_fields(&path).expect("check").is_empty());
    assert!(!migrate_config_file(&path).expect("migrate again"));

    // user values survive
    let cfg = Config::load_from(&path).expect("load");
    assert_eq!(cfg.database, "/data/students.sqlite");
    assert!(!cfg.confirm_delete);
    assert_eq!(cfg.grade_decimals, 2);
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = temp_dir("config_save");
    let path = dir.join("rstudents.conf");

    let mut cfg = Config::default();
    cfg.database = "/tmp/other.sqlite".into();
    cfg.separator_char = "=".into();
    cfg.save_to(&path).expect("save");

    let loaded = Config::load_from(&path).expect("load");
    assert_eq!(loaded.database, "/tmp/other.sqlite");
    assert_eq!(loaded.separator_char, "=");
}
