//! Prometheus to Grafana rule mapping
//!
//! This module turns parsed Prometheus rule groups into the Grafana rule
//! group shape consumed by Terraform's `grafana_rule_group` resource.
//!
//! # Example
//!
//! ```
//! use prom2grafana::mapper::{map_groups, MappingParams};
//! use prom2grafana::source::parse_rules;
//!
//! let file = parse_rules(b"groups:\n  - name: cpu\n    rules:\n      - record: r\n        expr: up\n")
//!     .unwrap();
//! let groups = map_groups(&file.groups, &MappingParams::default());
//! assert_eq!(groups[0].rules[0].name, "r");
//! ```

mod engine;
mod model;

pub use engine::{map_group, map_groups, map_rule, ConversionSummary, MappingParams};
pub use model::{
    DataQuery, GrafanaRule, GrafanaRuleGroup, NotificationSettings, QueryModel, RelativeTimeRange,
    CONDITION_REF_ID,
};
