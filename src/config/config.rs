use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, DATABASE_KEY_ENV, DATABASE_URL_ENV, SHEET_URL_ENV};
use crate::error::{AdminError, AdminResult};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: Option<String>,
    pub database_key: Option<String>,
    pub sheet_url: Option<String>,
    #[serde(default)]
    pub saved_searches: HashMap<String, String>,
}

/// Connection details for the hosted record store.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseCredentials {
    pub url: String,
    pub key: String,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Config::default(),
    }
}

/// Reads a config file, treating a missing or unreadable file as empty.
pub fn load_config_from(path: &Path) -> Config {
    fs::read_to_string(path)
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save_config(config: &Config) -> AdminResult<()> {
    let path = config_path()
        .ok_or_else(|| AdminError::ConfigError("Could not find home directory".to_string()))?;
    save_config_to(config, &path)
}

pub fn save_config_to(config: &Config, path: &Path) -> AdminResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

fn env_or(name: &str, fallback: Option<&String>) -> Option<String> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| fallback.cloned())
}

/// Environment variables win over the config file.
pub fn get_database_credentials() -> AdminResult<DatabaseCredentials> {
    let config = load_config();
    let url = env_or(DATABASE_URL_ENV, config.database_url.as_ref());
    let key = env_or(DATABASE_KEY_ENV, config.database_key.as_ref());

    match (url, key) {
        (Some(url), Some(key)) => Ok(DatabaseCredentials { url, key }),
        _ => Err(AdminError::CredentialsNotFound),
    }
}

pub fn get_sheet_url() -> AdminResult<String> {
    let config = load_config();
    env_or(SHEET_URL_ENV, config.sheet_url.as_ref()).ok_or(AdminError::CredentialsNotFound)
}
