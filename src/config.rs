//! Configuration loading and management.
//!
//! Analysis options are loaded from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. `.sql-optimizer.toml` in the current directory
//! 2. `~/.config/sql-optimizer/config.toml`
//! 3. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [analysis]
//! performance_analysis = true
//! security_analysis = true
//! best_practice_analysis = true
//! index_analysis = true
//!
//! [analysis.performance]
//! check_select_star = true
//! check_missing_limit = false
//! bulk_insert_threshold = 500
//!
//! [analysis.security]
//! sensitive_keywords = ["password", "secret", "apikey"]
//!
//! [analysis.best_practice]
//! check_where_clause = true
//! ```

use std::{env, fs, path::PathBuf};

use serde::Deserialize;

use crate::{
    error::{AppResult, config_error},
    options::AnalysisOptions
};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Analysis options applied to every call
    #[serde(default)]
    pub analysis: AnalysisOptions
}

impl Config {
    /// Load configuration from files, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or
    /// parsed.
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sql-optimizer")
                .join("config.toml");

            if home_config.exists() {
                config = Self::load_from(&home_config)?;
            }
        }

        let local_config = PathBuf::from(".sql-optimizer.toml");
        if local_config.exists() {
            config = Self::load_from(&local_config)?;
        }

        Ok(config)
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &PathBuf) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        toml::from_str(&content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }
}
