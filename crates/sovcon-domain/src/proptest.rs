//! Property-based tests for the console domain.
//!
//! These verify invariants around:
//! - Policy export/import round-tripping, including passthrough keys
//! - Field-edit idempotence
//! - Simulator metric bands for arbitrary seeds
//! - Latency window size and tick monotonicity

use crate::seed::seed_policy;
use crate::simulator::EvaluationSimulator;
use crate::store::PolicyStore;
use crate::trend::{LatencyTrend, LATENCY_WINDOW};
use proptest::prelude::*;
use serde_json::Value as JsonValue;

/// Strategy for passthrough keys. The `x_` prefix keeps generated keys out
/// of the typed schema's namespace.
fn arb_extra_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("x_[a-z0-9_]{1,8}").unwrap()
}

/// Strategy for leaf values, including strings with commas and quotes.
fn arb_leaf() -> impl Strategy<Value = JsonValue> {
    prop_oneof![
        any::<bool>().prop_map(JsonValue::from),
        any::<i32>().prop_map(JsonValue::from),
        prop::string::string_regex("[a-zA-Z0-9 ,\"]{0,12}")
            .unwrap()
            .prop_map(JsonValue::from),
    ]
}

proptest! {
    #[test]
    fn export_import_round_trips_with_passthrough_keys(
        extras in prop::collection::btree_map(arb_extra_key(), arb_leaf(), 0..5)
    ) {
        let mut policy = seed_policy();
        for (k, v) in extras {
            policy.extra.insert(k, v);
        }
        let mut store = PolicyStore::new(policy);
        let before = store.document().clone();
        let text = store.export_json().unwrap();
        store.replace_from_json(&text).unwrap();
        prop_assert_eq!(store.document(), &before);
    }

    #[test]
    fn set_field_twice_equals_once(key in arb_extra_key(), value in arb_leaf()) {
        let mut store = PolicyStore::new(seed_policy());
        let path = format!("pii_protection.{key}");
        store.set_field(&path, value.clone()).unwrap();
        let once = store.document().clone();
        store.set_field(&path, value).unwrap();
        prop_assert_eq!(store.document(), &once);
    }

    #[test]
    fn simulator_bands_hold_for_any_seed(seed in any::<u64>()) {
        let mut sim = EvaluationSimulator::from_seed(seed);
        for _ in 0..32 {
            let slang = sim.sample_metrics("Slang & Code-mixing ID-EN", "RAG Multibahasa");
            prop_assert!((0.82..=0.92).contains(&slang.di));
            prop_assert!((0.74..=0.83).contains(&slang.em));
            prop_assert!(slang.f1 >= slang.em);

            let plain = sim.sample_metrics("FAQ Banking - Bahasa Indonesia", "Fine-tuning Lokal");
            prop_assert!((0.88..=1.02).contains(&plain.di));
            prop_assert!((0.76..=0.86).contains(&plain.em));
            prop_assert!(plain.f1 >= plain.em);
        }
    }

    #[test]
    fn window_stays_full_with_monotonic_ticks(runs in 0usize..64, seed in any::<u64>()) {
        let mut sim = EvaluationSimulator::from_seed(seed);
        let mut trend = LatencyTrend::seeded(sim.seed_latency_window());
        for _ in 0..runs {
            let (p50, p95) = sim.sample_latency();
            trend.push(p50, p95);
            prop_assert_eq!(trend.len(), LATENCY_WINDOW);
        }
        let ticks: Vec<u64> = trend.points().map(|p| p.t).collect();
        for pair in ticks.windows(2) {
            prop_assert_eq!(pair[1], pair[0] + 1);
        }
    }
}
