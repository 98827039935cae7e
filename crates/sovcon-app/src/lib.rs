//! Use case orchestration for the governance console.
//!
//! This crate provides the application layer: one in-memory session tying
//! together the policy store, audit log, latency trend, and evaluation
//! simulator. It is intentionally thin and delegates to the domain crate.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod console;
mod schema;

pub use console::{AuditFormat, Console};
pub use schema::{audit_event_schema_json, policy_schema_json};
