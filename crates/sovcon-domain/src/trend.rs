//! Sliding latency trend window.

use sovcon_types::LatencyPoint;
use std::collections::VecDeque;

/// Number of points retained by the trend window.
pub const LATENCY_WINDOW: usize = 12;

/// Fixed-size sliding window of latency points. Each push drops the oldest
/// point once the window is full and appends a point whose tick is one past
/// the previous newest.
#[derive(Clone, Debug, Default)]
pub struct LatencyTrend {
    points: VecDeque<LatencyPoint>,
}

impl LatencyTrend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trend from an existing window, oldest first.
    pub fn seeded(points: impl IntoIterator<Item = LatencyPoint>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    pub fn push(&mut self, p50: f64, p95: f64) {
        let t = self.points.back().map_or(1, |last| last.t + 1);
        if self.points.len() >= LATENCY_WINDOW {
            self.points.pop_front();
        }
        self.points.push_back(LatencyPoint { t, p50, p95 });
    }

    /// Points oldest first.
    pub fn points(&self) -> impl Iterator<Item = &LatencyPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
