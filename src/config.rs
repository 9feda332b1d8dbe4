//! Configuration handling for the form

use crate::schema::{Locale, Schema, SchemaVariant};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_LOG_FILTER: &str = "profile_form=info";
const DEFAULT_LOG_FILE: &str = "profile-form.log";

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Language for labels and validation messages
    pub locale: Option<Locale>,
    /// Include the role select
    pub include_role: Option<bool>,
    /// Include the preferences checkbox group
    pub include_preferences: Option<bool>,
    /// Include the start/end date pair
    pub include_date_range: Option<bool>,
    /// Tracing filter directive, overridden by RUST_LOG
    pub log_filter: Option<String>,
    /// Log file, defaults to `profile-form.log` in the local data directory
    pub log_file: Option<PathBuf>,
}

impl FormConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "profile-form", "profile-form")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    fn default_log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join(DEFAULT_LOG_FILE))
    }

    /// Where logs go. Stderr is drawn over by the form, so a file is used
    /// unless no home directory can be found.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(Self::default_log_path)
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    pub fn schema(&self) -> Schema {
        let variant = SchemaVariant {
            role: self.include_role.unwrap_or(true),
            preferences: self.include_preferences.unwrap_or(true),
            date_range: self.include_date_range.unwrap_or(true),
        };
        Schema::new(variant, self.locale())
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
