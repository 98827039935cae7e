//! Evaluation metric and latency sample shapes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The dataset labels offered for evaluation runs.
pub const DATASET_CHOICES: [&str; 2] = [
    "FAQ Banking - Bahasa Indonesia",
    "Slang & Code-mixing ID-EN",
];

/// The method labels offered for evaluation runs.
pub const METHOD_CHOICES: [&str; 2] = ["RAG Multibahasa", "Fine-tuning Lokal"];

/// One simulated evaluation result. Replaced wholesale on every run; only
/// the latency trend retains history.
///
/// All four values are bounded in [0, 1], except `di` which may slightly
/// exceed 1 (disparate impact is a ratio with a conventional 0.80-1.25
/// target band).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetricSample {
    /// Exact match accuracy.
    pub em: f64,
    /// Token-level F1.
    pub f1: f64,
    /// Disparate impact ratio.
    pub di: f64,
    /// Toxicity rate.
    pub tox: f64,
}

/// One point of the p50/p95 latency trend.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LatencyPoint {
    /// Monotonically increasing tick, incremented by 1 per run.
    pub t: u64,
    pub p50: f64,
    pub p95: f64,
}
