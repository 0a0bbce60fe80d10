//! CLI argument parsing for prom2grafana
//!
//! This module provides the command-line interface using clap derive macros.
//!
//! # Options
//!
//! - `--input` / `-i`: Prometheus rule file (required, env: PROM2GRAFANA_INPUT)
//! - `--output` / `-o`: Output JSON file, stdout when omitted (env: PROM2GRAFANA_OUTPUT)
//! - `--folder-uid`: Grafana folder UID (env: PROM2GRAFANA_FOLDER_UID)
//! - `--interval-seconds`: Rule group interval (env: PROM2GRAFANA_INTERVAL_SECONDS)
//! - `--datasource-uid`: Query datasource UID (env: PROM2GRAFANA_DATASOURCE_UID)
//! - `--contact-point`: Notification contact point (env: PROM2GRAFANA_CONTACT_POINT)
//! - `--mute-timings`: Notification mute timings (env: PROM2GRAFANA_MUTE_TIMINGS)
//! - `--config` / `-c`: YAML file with defaults for the values above (env: PROM2GRAFANA_CONFIG)
//! - `--log-level` / `-l`: Log level (trace/debug/info/warn/error, env: PROM2GRAFANA_LOG_LEVEL)
//!
//! # Precedence
//!
//! Mapping values are resolved in the following order (highest to lowest priority):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::ConverterConfig;
use crate::error::ConvertResult;
use crate::pipeline::Settings;

/// prom2grafana - Convert Prometheus rule groups into Grafana rule groups
///
/// Reads a Prometheus rule file and writes the equivalent Grafana rule
/// groups as JSON for Terraform's grafana_rule_group resource.
#[derive(Parser, Debug)]
#[command(name = "prom2grafana")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the input YAML file containing Prometheus rules
    #[arg(short, long, value_name = "FILE", env = "PROM2GRAFANA_INPUT")]
    pub input: Option<PathBuf>,

    /// Path to the output file (prints to stdout when omitted)
    #[arg(short, long, value_name = "FILE", env = "PROM2GRAFANA_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Folder UID for Grafana rule groups
    #[arg(long, value_name = "UID", env = "PROM2GRAFANA_FOLDER_UID")]
    pub folder_uid: Option<String>,

    /// Evaluation interval for Grafana rule groups
    #[arg(long, value_name = "VALUE", env = "PROM2GRAFANA_INTERVAL_SECONDS")]
    pub interval_seconds: Option<String>,

    /// Datasource UID used by every rule query
    #[arg(long, value_name = "UID", env = "PROM2GRAFANA_DATASOURCE_UID")]
    pub datasource_uid: Option<String>,

    /// Notification contact point
    #[arg(long, value_name = "VALUE", env = "PROM2GRAFANA_CONTACT_POINT")]
    pub contact_point: Option<String>,

    /// Notification mute timings
    #[arg(long, value_name = "VALUE", env = "PROM2GRAFANA_MUTE_TIMINGS")]
    pub mute_timings: Option<String>,

    /// Path to a YAML file with default mapping values
    #[arg(short, long, value_name = "FILE", env = "PROM2GRAFANA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(
        short,
        long,
        value_enum,
        default_value = "warn",
        env = "PROM2GRAFANA_LOG_LEVEL"
    )]
    pub log_level: LogLevel,
}

impl Cli {
    /// Merge flags over the configuration file into run settings
    ///
    /// # Errors
    /// Fails if the configuration file cannot be loaded or no input path
    /// was given.
    pub fn into_settings(self) -> ConvertResult<Settings> {
        let mut config = ConverterConfig::load_optional(self.config.as_ref())?;

        if let Some(folder_uid) = self.folder_uid {
            config.folder_uid = folder_uid;
        }
        if let Some(interval_seconds) = self.interval_seconds {
            config.interval_seconds = interval_seconds;
        }
        if let Some(datasource_uid) = self.datasource_uid {
            config.datasource_uid = datasource_uid;
        }
        if let Some(contact_point) = self.contact_point {
            config.contact_point = contact_point;
        }
        if let Some(mute_timings) = self.mute_timings {
            config.mute_timings = mute_timings;
        }

        Settings::new(self.input, self.output, config.into_params())
    }
}

/// Log level options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Trace level - most verbose
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warn level - default
    Warn,
    /// Error level - least verbose
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use std::io::Write;

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Trace.to_string(), "trace");
        assert_eq!(LogLevel::Debug.to_string(), "debug");
        assert_eq!(LogLevel::Info.to_string(), "info");
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Error.to_string(), "error");
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["prom2grafana"]);
        assert_eq!(cli.input, None);
        assert_eq!(cli.output, None);
        assert_eq!(cli.folder_uid, None);
        assert_eq!(cli.interval_seconds, None);
        assert_eq!(cli.config, None);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_cli_with_options() {
        let cli = Cli::parse_from([
            "prom2grafana",
            "-i",
            "rules.yaml",
            "-o",
            "rules.json",
            "--folder-uid",
            "folder123",
            "--interval-seconds",
            "60",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.input, Some(PathBuf::from("rules.yaml")));
        assert_eq!(cli.output, Some(PathBuf::from("rules.json")));
        assert_eq!(cli.folder_uid, Some("folder123".to_string()));
        assert_eq!(cli.interval_seconds, Some("60".to_string()));
        assert_eq!(cli.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_into_settings_defaults() {
        let settings = Cli::parse_from(["prom2grafana", "-i", "rules.yaml"])
            .into_settings()
            .unwrap();
        assert_eq!(settings.input, PathBuf::from("rules.yaml"));
        assert_eq!(settings.sink, crate::writer::Sink::Stdout);
        assert_eq!(
            settings.params.folder_uid,
            "grafana_folder.prometheus_alerts.uid"
        );
        assert_eq!(settings.params.interval_seconds, "var.alert_interval_seconds");
    }

    #[test]
    fn test_into_settings_missing_input() {
        let result = Cli::parse_from(["prom2grafana"]).into_settings();
        assert!(matches!(result, Err(ConvertError::MissingArgument(_))));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "folder_uid: \"from-config\"").unwrap();
        writeln!(file, "datasource_uid: \"ds-config\"").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let settings = Cli::parse_from([
            "prom2grafana",
            "-i",
            "rules.yaml",
            "-c",
            &path,
            "--folder-uid",
            "from-cli",
        ])
        .into_settings()
        .unwrap();
        assert_eq!(settings.params.folder_uid, "from-cli");
        assert_eq!(settings.params.datasource_uid, "ds-config");
    }
}
