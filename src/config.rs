//! Configuration management for prom2grafana
//!
//! Handles loading run defaults from an optional YAML file. Every key is
//! optional; missing keys fall back to the Terraform placeholders below.
//!
//! ```yaml
//! folder_uid: "grafana_folder.platform.uid"
//! interval_seconds: "60"
//! datasource_uid: "var.mimir_uid"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::mapper::MappingParams;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Error parsing the configuration file
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Run defaults for the generated Grafana rule groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Folder UID stamped on every rule group
    #[serde(default = "default_folder_uid")]
    pub folder_uid: String,

    /// Evaluation interval stamped on every rule group
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: String,

    /// Datasource UID used by every query
    #[serde(default = "default_datasource_uid")]
    pub datasource_uid: String,

    /// Notification contact point
    #[serde(default = "default_contact_point")]
    pub contact_point: String,

    /// Notification mute timings
    #[serde(default = "default_mute_timings")]
    pub mute_timings: String,
}

// Default value functions
fn default_folder_uid() -> String {
    "grafana_folder.prometheus_alerts.uid".to_string()
}

fn default_interval_seconds() -> String {
    "var.alert_interval_seconds".to_string()
}

fn default_datasource_uid() -> String {
    "var.datasource_uid".to_string()
}

fn default_contact_point() -> String {
    "var.notification_settings.contact_point".to_string()
}

fn default_mute_timings() -> String {
    "var.notification_settings.mute_timings".to_string()
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            folder_uid: default_folder_uid(),
            interval_seconds: default_interval_seconds(),
            datasource_uid: default_datasource_uid(),
            contact_point: default_contact_point(),
            mute_timings: default_mute_timings(),
        }
    }
}

impl ConverterConfig {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ConverterConfig = serde_yaml::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded converter config");
        Ok(config)
    }

    /// Load configuration when a path was given, otherwise use the defaults
    ///
    /// An explicitly requested file that does not exist is an error.
    pub fn load_optional<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Freeze the configuration into mapping parameters
    pub fn into_params(self) -> MappingParams {
        MappingParams {
            folder_uid: self.folder_uid,
            interval_seconds: self.interval_seconds,
            datasource_uid: self.datasource_uid,
            contact_point: self.contact_point,
            mute_timings: self.mute_timings,
        }
    }
}
