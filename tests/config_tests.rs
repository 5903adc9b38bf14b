mod common;
use common::temp_config;
use fleetwatch::config::Config;
use fleetwatch::errors::AppError;
use std::fs;
use std::path::Path;

#[test]
fn test_missing_file_gives_defaults() {
    let path = temp_config("cfg_missing");
    let cfg = Config::load(Path::new(&path)).unwrap();

    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.alert_threshold, 70);
    assert!(cfg.auto_alert);
    assert_eq!(cfg.refresh_interval_secs, 60);
}

#[test]
fn test_partial_file_fills_defaults() {
    let path = temp_config("cfg_partial");
    fs::write(&path, "alert_threshold: 85\n").unwrap();

    let cfg = Config::load(Path::new(&path)).unwrap();
    assert_eq!(cfg.alert_threshold, 85);
    assert_eq!(cfg.top_drivers, 5);

    let missing = Config::missing_keys("alert_threshold: 85\n").unwrap();
    assert!(missing.contains(&"auto_alert"));
    assert!(!missing.contains(&"alert_threshold"));
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(matches!(
        Config::parse("alert_threshold: 150\n"),
        Err(AppError::Config(_))
    ));
    assert!(matches!(
        Config::parse("refresh_interval_secs: 0\n"),
        Err(AppError::Config(_))
    ));
    assert!(matches!(
        Config::parse("alert_threshold: [1, 2]\n"),
        Err(AppError::ConfigParse(_))
    ));
}

#[test]
fn test_init_file_round_trips() {
    let path = temp_config("cfg_init");
    let written = Config::init_file(Path::new(&path)).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(Config::missing_keys(&content).unwrap().is_empty());
    assert_eq!(Config::load(Path::new(&path)).unwrap(), written);

    fs::remove_file(&path).ok();
}
