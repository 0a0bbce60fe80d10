//! Conversion pipeline
//!
//! Read → parse → map → render → write, once, stopping at the first error.
//! The sink is only touched after the whole document has been rendered.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{ConvertError, ConvertResult};
use crate::mapper::{map_groups, ConversionSummary, MappingParams};
use crate::source::read_rules;
use crate::writer::{render, write_output, Sink};

/// Resolved inputs of a single run
#[derive(Debug, Clone)]
pub struct Settings {
    pub input: PathBuf,
    pub sink: Sink,
    pub params: MappingParams,
}

impl Settings {
    /// Build settings, failing if no input path was supplied
    ///
    /// # Errors
    /// Returns `ConvertError::MissingArgument` when `input` is `None`.
    pub fn new(
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        params: MappingParams,
    ) -> ConvertResult<Self> {
        let input = input.ok_or(ConvertError::MissingArgument("--input"))?;
        Ok(Self {
            input,
            sink: Sink::from_path(output),
            params,
        })
    }
}

/// Run one conversion
pub fn run(settings: &Settings) -> ConvertResult<ConversionSummary> {
    let source = read_rules(&settings.input)?;
    let groups = map_groups(&source.groups, &settings.params);
    let summary = ConversionSummary::of(&groups);
    debug!(
        groups = summary.groups,
        rules = summary.rules,
        "Mapped rule groups"
    );

    let document = render(&groups)?;
    write_output(&document, &settings.sink)?;

    info!(
        input = %settings.input.display(),
        output = %settings.sink,
        groups = summary.groups,
        rules = summary.rules,
        "Conversion finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_require_input() {
        let result = Settings::new(None, None, MappingParams::default());
        assert!(matches!(
            result,
            Err(ConvertError::MissingArgument("--input"))
        ));
    }

    #[test]
    fn test_run_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("rules.yaml");
        let output = dir.path().join("rules.json");
        std::fs::write(
            &input,
            "groups:\n  - name: g\n    rules:\n      - record: a\n        expr: up\n",
        )
        .unwrap();

        let settings = Settings::new(Some(input), Some(output.clone()), MappingParams::default())
            .unwrap();
        let summary = run(&settings).unwrap();
        assert_eq!(summary, ConversionSummary { groups: 1, rules: 1 });

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json[0]["rules"][0]["name"], "a");
    }

    #[test]
    fn test_parse_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("rules.yaml");
        let output = dir.path().join("rules.json");
        std::fs::write(&input, "groups: [broken\n").unwrap();

        let settings = Settings::new(Some(input), Some(output.clone()), MappingParams::default())
            .unwrap();
        assert!(matches!(run(&settings), Err(ConvertError::Parse(_))));
        assert!(!output.exists());
    }
}
