//! Stable DTOs and tokens used across the sovcon workspace.
//!
//! This crate is intentionally boring:
//! - the policy document and its named sub-groups
//! - audit event shape and well-known action/actor/outcome tokens
//! - metric and latency sample shapes
//! - the project profile record

#![forbid(unsafe_code)]

pub mod audit;
pub mod metrics;
pub mod policy;
pub mod profile;
pub mod tokens;

pub use audit::AuditEvent;
pub use metrics::{LatencyPoint, MetricSample, DATASET_CHOICES, METHOD_CHOICES};
pub use policy::{
    AccessControl, AuditTrail, Encryption, PiiProtection, PolicyDocument, Transparency,
    RESIDENCY_CHOICES,
};
pub use profile::{ProjectProfile, MODEL_CHOICES, REGION_CHOICES, SECTOR_CHOICES};

/// Stable schema identifiers for exported artifacts.
pub const SCHEMA_POLICY_V1: &str = "sovcon.policy.v1";
pub const SCHEMA_AUDIT_EVENT_V1: &str = "sovcon.audit-event.v1";
