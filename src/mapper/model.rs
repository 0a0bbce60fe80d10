//! Grafana rule group model
//!
//! Field declaration order is the JSON key order of the rendered document.

use std::collections::BTreeMap;

use serde::Serialize;

/// Reference identifier shared by the single query and the rule condition
pub const CONDITION_REF_ID: &str = "A";

/// Query look-back window in seconds
pub const RELATIVE_TIME_FROM: u64 = 300;

/// A Grafana rule group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrafanaRuleGroup {
    pub name: String,
    pub folder_uid: String,
    /// Kept as text so it can hold a Terraform reference
    pub interval_seconds: String,
    pub rules: Vec<GrafanaRule>,
}

/// A Grafana alert rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrafanaRule {
    pub name: String,
    pub condition: String,
    pub annotations: BTreeMap<String, String>,
    pub notification_settings: NotificationSettings,
    /// Always exactly one entry
    pub data: Vec<DataQuery>,
}

/// Notification routing placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationSettings {
    pub contact_point: String,
    pub mute_timings: String,
}

/// A query feeding the rule condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataQuery {
    pub ref_id: String,
    pub datasource_uid: String,
    pub model: QueryModel,
    pub relative_time_range: RelativeTimeRange,
}

/// Datasource query model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryModel {
    pub expr: String,
    #[serde(rename = "refId")]
    pub ref_id: String,
    pub instant: bool,
}

/// Query time range, in seconds relative to evaluation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelativeTimeRange {
    pub from: u64,
    pub to: u64,
}

impl Default for RelativeTimeRange {
    fn default() -> Self {
        Self {
            from: RELATIVE_TIME_FROM,
            to: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_model_keys() {
        let model = QueryModel {
            expr: "up".to_string(),
            ref_id: CONDITION_REF_ID.to_string(),
            instant: true,
        };
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#"{"expr":"up","refId":"A","instant":true}"#);
    }

    #[test]
    fn test_relative_time_range_default() {
        let json = serde_json::to_string(&RelativeTimeRange::default()).unwrap();
        assert_eq!(json, r#"{"from":300,"to":0}"#);
    }
}
