//! Deterministic export encoders for the audit trail (CSV, JSONL).

#![forbid(unsafe_code)]

mod csv;
mod jsonl;
mod model;

pub use csv::{csv_from_rows, render_audit_csv};
pub use jsonl::render_audit_jsonl;
