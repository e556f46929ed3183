use crate::core::{Result, RosterError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level configuration structure parsed from a TOML file.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
}

/// Database-related configuration.
#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file, or ":memory:".
    pub path: String,
    /// Whether to enable the foreign_keys pragma on open. Defaults to on.
    pub foreign_keys: Option<bool>,
    /// Journal mode to set on open (e.g. "WAL").
    pub journal_mode: Option<String>,
}

/// Loads configuration from a TOML file at the given path.
///
/// # Arguments
///
/// * `path` - The file path to the TOML configuration file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| RosterError::Config(e.to_string()))
}
