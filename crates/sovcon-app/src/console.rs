//! One console session: a single logical thread of control over the policy
//! store, audit log, metric sample, latency trend, and project profile.
//! All operations are synchronous and run to completion; file contents are
//! handed in as already-materialized strings.

use sovcon_domain::{
    fair_score, seed, AuditLog, EvaluationSimulator, FairScore, LatencyTrend, PolicyError,
    PolicyStore,
};
use sovcon_types::{tokens, AuditEvent, MetricSample, ProjectProfile};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuditFormat {
    Csv,
    Jsonl,
}

pub struct Console {
    policy: PolicyStore,
    audit: AuditLog,
    trend: LatencyTrend,
    metrics: MetricSample,
    profile: ProjectProfile,
    simulator: EvaluationSimulator,
}

impl Console {
    /// A fresh session with the default policy, the three seed audit
    /// events, a 12-point latency window, and a simulator seeded from
    /// `seed`.
    pub fn seeded(seed: u64) -> Self {
        let mut simulator = EvaluationSimulator::from_seed(seed);
        let trend = LatencyTrend::seeded(simulator.seed_latency_window());
        Self {
            policy: PolicyStore::new(seed::seed_policy()),
            audit: AuditLog::seeded(seed::seed_audit_events()),
            trend,
            metrics: seed::seed_metrics(),
            profile: seed::seed_profile(),
            simulator,
        }
    }

    pub fn policy(&self) -> &PolicyStore {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut PolicyStore {
        &mut self.policy
    }

    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    pub fn trend(&self) -> &LatencyTrend {
        &self.trend
    }

    pub fn metrics(&self) -> MetricSample {
        self.metrics
    }

    pub fn profile(&self) -> &ProjectProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ProjectProfile {
        &mut self.profile
    }

    /// Replace the policy from imported file text and record the import in
    /// the audit trail. On a parse failure neither the document nor the
    /// log changes; the worst case is a no-op plus the surfaced error.
    pub fn import_policy(&mut self, file_name: &str, text: &str) -> Result<(), PolicyError> {
        self.policy.replace_from_json(text)?;
        self.audit.append(AuditEvent::new(
            OffsetDateTime::now_utc(),
            tokens::ACTOR_ADMIN,
            tokens::ACTION_IMPORT_POLICY,
            file_name,
            tokens::OUTCOME_SUCCESS,
        ));
        Ok(())
    }

    pub fn export_policy(&self) -> Result<String, PolicyError> {
        self.policy.export_json()
    }

    /// Simulate one evaluation run: draw a fresh metric sample (replacing
    /// the current one), slide the latency window, and record the run in
    /// the audit trail. Cannot fail.
    pub fn run_evaluation(&mut self, dataset: &str, method: &str) -> MetricSample {
        self.metrics = self.simulator.sample_metrics(dataset, method);
        let (p50, p95) = self.simulator.sample_latency();
        self.trend.push(p50, p95);
        self.audit.append(AuditEvent::new(
            OffsetDateTime::now_utc(),
            tokens::ACTOR_EVAL_SERVICE,
            tokens::ACTION_RUN_EVAL,
            format!("{dataset} | {method}"),
            tokens::OUTCOME_OK,
        ));
        self.metrics
    }

    pub fn export_audit(&self, format: AuditFormat) -> String {
        match format {
            AuditFormat::Csv => self.audit.export_csv(),
            AuditFormat::Jsonl => self.audit.export_jsonl(),
        }
    }

    pub fn fair_score(&self) -> FairScore {
        fair_score(self.policy.document())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sovcon_domain::LATENCY_WINDOW;

    #[test]
    fn seeded_session_has_the_documented_initial_state() {
        let console = Console::seeded(1);
        assert_eq!(console.audit().len(), 3);
        assert_eq!(console.trend().len(), LATENCY_WINDOW);
        assert_eq!(console.metrics().em, 0.78);
        assert_eq!(console.profile().sector, "Keuangan");
        assert_eq!(console.policy().document().retention_days, Some(30));
    }

    #[test]
    fn import_appends_one_audit_event_with_the_file_name() {
        let mut console = Console::seeded(1);
        let text = console.export_policy().unwrap();
        console.import_policy("policy.json", &text).unwrap();

        assert_eq!(console.audit().len(), 4);
        let head = console.audit().events().next().unwrap();
        assert_eq!(head.action, tokens::ACTION_IMPORT_POLICY);
        assert_eq!(head.actor, tokens::ACTOR_ADMIN);
        assert_eq!(head.resource, "policy.json");
        assert_eq!(head.outcome, tokens::OUTCOME_SUCCESS);
    }

    #[test]
    fn failed_import_changes_neither_document_nor_log() {
        let mut console = Console::seeded(1);
        let before = console.policy().document().clone();
        assert!(console.import_policy("broken.json", "{not json").is_err());
        assert_eq!(console.policy().document(), &before);
        assert_eq!(console.audit().len(), 3);
    }

    #[test]
    fn run_evaluation_updates_metrics_trend_and_audit() {
        let mut console = Console::seeded(7);
        let first_tick_before = console.trend().points().next().unwrap().t;

        let sample = console.run_evaluation("Slang & Code-mixing ID-EN", "RAG Multibahasa");
        assert!((0.82..=0.92).contains(&sample.di));
        assert_eq!(console.metrics(), sample);

        assert_eq!(console.trend().len(), LATENCY_WINDOW);
        assert_eq!(console.trend().points().next().unwrap().t, first_tick_before + 1);

        let head = console.audit().events().next().unwrap();
        assert_eq!(head.action, tokens::ACTION_RUN_EVAL);
        assert_eq!(head.actor, tokens::ACTOR_EVAL_SERVICE);
        assert_eq!(head.resource, "Slang & Code-mixing ID-EN | RAG Multibahasa");
        assert_eq!(head.outcome, tokens::OUTCOME_OK);
    }

    #[test]
    fn audit_export_formats_agree_on_event_count() {
        let mut console = Console::seeded(7);
        console.run_evaluation("Slang", "RAG");
        let csv = console.export_audit(AuditFormat::Csv);
        let jsonl = console.export_audit(AuditFormat::Jsonl);
        // CSV adds one header line.
        assert_eq!(csv.lines().count(), jsonl.lines().count() + 1);
    }
}
