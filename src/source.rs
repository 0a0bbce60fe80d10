//! Prometheus rule file model and reader
//!
//! Deserializes the `groups:` document used by Prometheus rule files.
//! Only `name`, `rules`, `record` and `expr` are read; any other key
//! (`alert`, `labels`, `for`, `interval`, ...) is ignored.
//!
//! # Example
//!
//! ```
//! use prom2grafana::source::parse_rules;
//!
//! let rules = parse_rules(b"groups:\n  - name: cpu\n    rules: []\n").unwrap();
//! assert_eq!(rules.groups[0].name, "cpu");
//! ```

use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::{ConvertError, ConvertResult};

/// Root of a Prometheus rule file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuleFile {
    /// Rule groups in document order
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Vec<RuleGroup>,
}

/// A named group of Prometheus rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuleGroup {
    /// Group name
    #[serde(default)]
    pub name: String,

    /// Rules in document order
    #[serde(default, deserialize_with = "null_as_default")]
    pub rules: Vec<Rule>,
}

/// A single Prometheus rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Rule {
    /// PromQL expression, kept as opaque text
    #[serde(default)]
    pub expr: String,

    /// Output metric name
    #[serde(default)]
    pub record: String,
}

impl RuleFile {
    /// Total number of rules across all groups
    pub fn rule_count(&self) -> usize {
        self.groups.iter().map(|g| g.rules.len()).sum()
    }
}

// `groups: ~` and `rules:` with no value decode as empty sequences.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a Prometheus rule file from raw bytes
///
/// An empty or whitespace-only document yields a file with no groups.
///
/// # Errors
/// Returns `ConvertError::Parse` if the bytes are not YAML or do not match
/// the rule file shape.
pub fn parse_rules(bytes: &[u8]) -> ConvertResult<RuleFile> {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(RuleFile::default());
    }

    let file: RuleFile = serde_yaml::from_slice(bytes)?;
    tracing::debug!(
        groups = file.groups.len(),
        rules = file.rule_count(),
        "Parsed Prometheus rule file"
    );
    Ok(file)
}

/// Read and parse a Prometheus rule file from disk
///
/// # Errors
/// Returns `ConvertError::Read` if the file cannot be read, or
/// `ConvertError::Parse` if its contents are malformed.
pub fn read_rules<P: AsRef<Path>>(path: P) -> ConvertResult<RuleFile> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read input file");
    parse_rules(&bytes)
}
