//! Error types for prom2grafana
//!
//! Every variant is fatal: the pipeline never recovers from one, it stops
//! and reports it.

use std::path::PathBuf;

use thiserror::Error;

/// Conversion error type
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A required parameter was not supplied
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// The input file could not be read
    #[error("Failed to read input file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input does not match the Prometheus rule file schema
    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The Grafana rule groups could not be encoded
    #[error("Failed to serialize to JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output sink could not be written
    #[error("Failed to write output file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Defaults file error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Result type alias for conversion errors
pub type ConvertResult<T> = Result<T, ConvertError>;
