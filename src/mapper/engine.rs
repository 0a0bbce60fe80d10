//! Rule mapping engine
//!
//! Pure functions from the Prometheus source model to the Grafana model.
//! No field is validated: empty names and expressions pass through as-is.

use std::collections::BTreeMap;

use super::model::{
    DataQuery, GrafanaRule, GrafanaRuleGroup, NotificationSettings, QueryModel, RelativeTimeRange,
    CONDITION_REF_ID,
};
use crate::source::{Rule, RuleGroup};

/// Values stamped onto every generated group and rule
///
/// Resolved once per run and passed explicitly to the mapping functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingParams {
    pub folder_uid: String,
    pub interval_seconds: String,
    pub datasource_uid: String,
    pub contact_point: String,
    pub mute_timings: String,
}

impl Default for MappingParams {
    fn default() -> Self {
        crate::config::ConverterConfig::default().into_params()
    }
}

/// Counts describing a mapped document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub groups: usize,
    pub rules: usize,
}

impl ConversionSummary {
    /// Summarize a list of mapped groups
    pub fn of(groups: &[GrafanaRuleGroup]) -> Self {
        Self {
            groups: groups.len(),
            rules: groups.iter().map(|g| g.rules.len()).sum(),
        }
    }
}

/// Map every source group, preserving order
pub fn map_groups(groups: &[RuleGroup], params: &MappingParams) -> Vec<GrafanaRuleGroup> {
    groups.iter().map(|group| map_group(group, params)).collect()
}

/// Map one source group and its rules
pub fn map_group(group: &RuleGroup, params: &MappingParams) -> GrafanaRuleGroup {
    tracing::trace!(group = %group.name, rules = group.rules.len(), "Mapping rule group");

    GrafanaRuleGroup {
        name: group.name.clone(),
        folder_uid: params.folder_uid.clone(),
        interval_seconds: params.interval_seconds.clone(),
        rules: group.rules.iter().map(|rule| map_rule(rule, params)).collect(),
    }
}

/// Map one source rule into a single-query Grafana rule
pub fn map_rule(rule: &Rule, params: &MappingParams) -> GrafanaRule {
    let mut annotations = BTreeMap::new();
    annotations.insert(
        "description".to_string(),
        format!("Rule for {}", rule.record),
    );

    GrafanaRule {
        name: rule.record.clone(),
        condition: CONDITION_REF_ID.to_string(),
        annotations,
        notification_settings: NotificationSettings {
            contact_point: params.contact_point.clone(),
            mute_timings: params.mute_timings.clone(),
        },
        data: vec![DataQuery {
            ref_id: CONDITION_REF_ID.to_string(),
            datasource_uid: params.datasource_uid.clone(),
            model: QueryModel {
                expr: rule.expr.clone(),
                ref_id: CONDITION_REF_ID.to_string(),
                instant: true,
            },
            relative_time_range: RelativeTimeRange::default(),
        }],
    }
}
