//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use skyward::config::AppConfig;
use skyward::demos::DemoKind;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("SKY_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("SKY_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_selects_demo() {
    std::env::set_var("SKY_DEMO__KIND", "throttle");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.demo.kind, DemoKind::Throttle);
    std::env::remove_var("SKY_DEMO__KIND");
}

#[test]
#[serial]
fn test_default_file_matches_defaults() {
    std::env::remove_var("SKY_WINDOW__TITLE");
    std::env::remove_var("SKY_DEMO__KIND");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let loaded = AppConfig::load_from(cwd.join("config")).unwrap();
    let defaults = AppConfig::default();
    assert_eq!(loaded.window.title, defaults.window.title);
    assert_eq!(loaded.throttle.max_speed, defaults.throttle.max_speed);
    assert_eq!(loaded.walk.eye_height, defaults.walk.eye_height);
    assert_eq!(loaded.demo.kind, defaults.demo.kind);
}
