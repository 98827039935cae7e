//! JSON schema emission for the wire types.

use anyhow::Context;
use schemars::schema_for;
use sovcon_types::{AuditEvent, PolicyDocument};

pub fn policy_schema_json() -> anyhow::Result<String> {
    let schema = schema_for!(PolicyDocument);
    serde_json::to_string_pretty(&schema).context("serialize policy schema")
}

pub fn audit_event_schema_json() -> anyhow::Result<String> {
    let schema = schema_for!(AuditEvent);
    serde_json::to_string_pretty(&schema).context("serialize audit event schema")
}
