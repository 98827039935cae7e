//! Bounded-random evaluation metric generation.
//!
//! There is no real inference or fairness computation behind these numbers;
//! the simulator exists to populate the console with plausible samples. The
//! random source is injected so the bounds are deterministically testable.

use crate::trend::LATENCY_WINDOW;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sovcon_types::{LatencyPoint, MetricSample};

/// Dataset labels containing this marker draw `di` from the tighter
/// slang/code-mixed band.
const SLANG_MARKER: &str = "Slang";
/// Method labels containing this marker draw `em` from the
/// retrieval-augmented band.
const RAG_MARKER: &str = "RAG";

#[derive(Clone, Debug)]
pub struct EvaluationSimulator<R = StdRng> {
    rng: R,
}

impl EvaluationSimulator<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> EvaluationSimulator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw one metric sample for the given dataset/method labels. Cannot
    /// fail; every value is rounded to 2 decimal places at generation time
    /// and `f1 >= em` always holds.
    pub fn sample_metrics(&mut self, dataset: &str, method: &str) -> MetricSample {
        let di = if dataset.contains(SLANG_MARKER) {
            self.draw(0.82, 0.92)
        } else {
            self.draw(0.88, 1.02)
        };
        let em = if method.contains(RAG_MARKER) {
            self.draw(0.74, 0.83)
        } else {
            self.draw(0.76, 0.86)
        };
        let f1 = round2(em + self.draw(0.02, 0.05));
        let tox = self.draw(0.003, 0.01);
        MetricSample { em, f1, di, tox }
    }

    /// One per-run latency draw: (p50, p95) in milliseconds.
    pub fn sample_latency(&mut self) -> (f64, f64) {
        (self.draw(65.0, 115.0), self.draw(190.0, 310.0))
    }

    /// The initial 12-point trend window. Seeded from slightly wider bounds
    /// than the per-run draw, matching the chart's starting spread.
    pub fn seed_latency_window(&mut self) -> Vec<LatencyPoint> {
        (1..=LATENCY_WINDOW as u64)
            .map(|t| LatencyPoint {
                t,
                p50: self.draw(60.0, 110.0),
                p95: self.draw(180.0, 320.0),
            })
            .collect()
    }

    fn draw(&mut self, min: f64, max: f64) -> f64 {
        round2(self.rng.random_range(min..max))
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slang_dataset_bounds_di() {
        let mut sim = EvaluationSimulator::from_seed(7);
        for _ in 0..10_000 {
            let m = sim.sample_metrics("Slang & Code-mixing ID-EN", "RAG Multibahasa");
            assert!((0.82..=0.92).contains(&m.di), "di out of band: {}", m.di);
        }
    }

    #[test]
    fn plain_dataset_bounds_di() {
        let mut sim = EvaluationSimulator::from_seed(7);
        for _ in 0..10_000 {
            let m = sim.sample_metrics("FAQ Banking - Bahasa Indonesia", "Fine-tuning Lokal");
            assert!((0.88..=1.02).contains(&m.di), "di out of band: {}", m.di);
        }
    }

    #[test]
    fn rag_method_bounds_em_and_f1_dominates() {
        let mut sim = EvaluationSimulator::from_seed(42);
        for _ in 0..10_000 {
            let m = sim.sample_metrics("Slang & Code-mixing ID-EN", "RAG Multibahasa");
            assert!((0.74..=0.83).contains(&m.em), "em out of band: {}", m.em);
            assert!(m.f1 >= m.em, "f1 {} below em {}", m.f1, m.em);
            assert!((0.0..=0.01).contains(&m.tox));
        }
    }

    #[test]
    fn non_rag_method_bounds_em() {
        let mut sim = EvaluationSimulator::from_seed(42);
        for _ in 0..10_000 {
            let m = sim.sample_metrics("FAQ Banking - Bahasa Indonesia", "Fine-tuning Lokal");
            assert!((0.76..=0.86).contains(&m.em), "em out of band: {}", m.em);
        }
    }

    #[test]
    fn values_are_rounded_to_two_decimals() {
        let mut sim = EvaluationSimulator::from_seed(1);
        for _ in 0..1_000 {
            let m = sim.sample_metrics("Slang", "RAG");
            for v in [m.em, m.f1, m.di, m.tox] {
                let scaled = v * 100.0;
                assert!((scaled - scaled.round()).abs() < 1e-9, "not 2dp: {v}");
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_samples() {
        let mut a = EvaluationSimulator::from_seed(99);
        let mut b = EvaluationSimulator::from_seed(99);
        for _ in 0..100 {
            assert_eq!(
                a.sample_metrics("Slang", "RAG"),
                b.sample_metrics("Slang", "RAG")
            );
        }
    }

    #[test]
    fn latency_draws_stay_in_band() {
        let mut sim = EvaluationSimulator::from_seed(3);
        for _ in 0..10_000 {
            let (p50, p95) = sim.sample_latency();
            assert!((65.0..=115.0).contains(&p50));
            assert!((190.0..=310.0).contains(&p95));
        }
        let window = sim.seed_latency_window();
        assert_eq!(window.len(), LATENCY_WINDOW);
        for p in &window {
            assert!((60.0..=110.0).contains(&p.p50));
            assert!((180.0..=320.0).contains(&p.p95));
        }
    }
}
