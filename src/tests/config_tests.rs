use tempfile::TempDir;

use crate::config::{load_config_from, save_config_to, Config};

#[test]
fn test_missing_config_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from(&dir.path().join("absent.json"));
    assert!(config.database_url.is_none());
    assert!(config.saved_searches.is_empty());
}

#[test]
fn test_config_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let mut config = Config::default();
    config.database_url = Some("https://db.example.com".to_string());
    config.database_key = Some("service-key".to_string());
    config.sheet_url = Some("https://sheetdb.io/api/v1/abc".to_string());
    config.saved_searches.insert("gmail".to_string(), "@gmail.com".to_string());

    save_config_to(&config, &path).unwrap();
    let loaded = load_config_from(&path);

    assert_eq!(loaded.database_url.as_deref(), Some("https://db.example.com"));
    assert_eq!(loaded.database_key.as_deref(), Some("service-key"));
    assert_eq!(loaded.sheet_url.as_deref(), Some("https://sheetdb.io/api/v1/abc"));
    assert_eq!(loaded.saved_searches.get("gmail").map(String::as_str), Some("@gmail.com"));
}

#[test]
fn test_config_without_saved_searches_still_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"database_url":"https://db","database_key":"k","sheet_url":null}"#).unwrap();

    let loaded = load_config_from(&path);
    assert_eq!(loaded.database_key.as_deref(), Some("k"));
    assert!(loaded.saved_searches.is_empty());
}

#[test]
fn test_corrupt_config_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(load_config_from(&path).database_url.is_none());
}
