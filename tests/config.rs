use std::fs;
use std::path::PathBuf;

use setcal::config::{Settings, DEFAULT_MAX_ROWS};
use setcal::error::SetcalError;

fn config_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("setcal_{}_{}.toml", name, std::process::id()));
    fs::write(&path, contents).expect("write config file");
    path
}

#[test]
fn defaults() {
    let settings = Settings::default();
    assert_eq!(settings.max_rows, DEFAULT_MAX_ROWS);
    assert_eq!(settings.max_rows, 1000);
    assert_eq!(settings.log, "warn");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("setcal_config_that_does_not_exist.toml");
    let settings = Settings::load_from(path.to_str().expect("utf8 path")).expect("load");
    assert_eq!(settings, Settings::default());
}

#[test]
fn file_overrides_defaults() {
    let path = config_file("override", "max_rows = 5\nlog = \"debug\"\n");
    let settings = Settings::load_from(path.to_str().expect("utf8 path")).expect("load");
    assert_eq!(settings.max_rows, 5);
    assert_eq!(settings.log, "debug");
    fs::remove_file(path).ok();
}

#[test]
fn partial_file_keeps_other_defaults() {
    let path = config_file("partial", "max_rows = 20\n");
    let settings = Settings::load_from(path.to_str().expect("utf8 path")).expect("load");
    assert_eq!(settings.max_rows, 20);
    assert_eq!(settings.log, "warn");
    fs::remove_file(path).ok();
}

#[test]
fn zero_rows_is_rejected() {
    let path = config_file("zero", "max_rows = 0\n");
    let err = Settings::load_from(path.to_str().expect("utf8 path")).unwrap_err();
    assert!(matches!(err, SetcalError::Config(_)), "got {err}");
    fs::remove_file(path).ok();
}

#[test]
fn malformed_values_are_config_errors() {
    let path = config_file("malformed", "max_rows = \"many\"\n");
    let err = Settings::load_from(path.to_str().expect("utf8 path")).unwrap_err();
    assert!(matches!(err, SetcalError::Config(_)), "got {err}");
    fs::remove_file(path).ok();
}
