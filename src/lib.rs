pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod views;

#[cfg(test)]
mod tests;

pub use client::{DatabaseClient, FeedbackStore, RecordStore, SheetClient, StatsSource};
pub use config::{load_config, save_config, Config, DatabaseCredentials};
pub use error::{AdminError, AdminResult};
pub use models::*;
