//! Pure console state machines (no IO).
//!
//! Input: user edits, imported policy text, evaluation run requests.
//! Output: the current policy document, the audit trail, metric samples,
//! and the latency trend. File handling and timestamps live in the app
//! layer; everything here is synchronous and runs to completion.

#![forbid(unsafe_code)]

pub mod audit_log;
pub mod fair;
pub mod seed;
pub mod simulator;
pub mod store;
pub mod trend;

mod error;

pub use audit_log::AuditLog;
pub use error::PolicyError;
pub use fair::{fair_score, FairScore};
pub use simulator::EvaluationSimulator;
pub use store::PolicyStore;
pub use trend::{LatencyTrend, LATENCY_WINDOW};

#[cfg(test)]
mod proptest;
