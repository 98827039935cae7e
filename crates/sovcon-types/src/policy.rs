//! The policy document and its named sub-groups.
//!
//! Editing is intentionally permissive: every known field is optional, and
//! unknown keys (top-level or inside a sub-group) pass through a flattened
//! map untouched. A document therefore round-trips losslessly through
//! serialization even when it carries keys this crate has never heard of.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// The fixed set of data-residency labels surfaced by the console.
pub const RESIDENCY_CHOICES: [&str; 2] = ["Indonesia-only (on-shore)", "Hybrid (prior approval)"];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_residency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_days: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_opt_in: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pii_protection: Option<PiiProtection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption: Option<Encryption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_control: Option<AccessControl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_trail: Option<AuditTrail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparency: Option<Transparency>,

    /// Unknown top-level keys, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PiiProtection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooling: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pii_categories: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Encryption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_rest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_transit: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AccessControl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_cycle_days: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditTrail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_months: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_format: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Transparency {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_card_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluations_published: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}
