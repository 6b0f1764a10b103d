#[allow(clippy::module_inception)]
mod config;

pub use config::{
    Config, DatabaseCredentials, get_database_credentials, get_sheet_url, load_config,
    load_config_from, save_config, save_config_to, config_path,
};
