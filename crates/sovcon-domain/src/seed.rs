//! Initial console state: the v0.3 default policy, seed audit events, seed
//! metrics, and the default project profile.

use serde_json::Map;
use sovcon_types::{
    AccessControl, AuditEvent, AuditTrail, Encryption, MetricSample, PiiProtection,
    PolicyDocument, ProjectProfile, Transparency, tokens,
};
use time::macros::datetime;

/// The default data-handling policy shipped with the console.
pub fn seed_policy() -> PolicyDocument {
    PolicyDocument {
        version: Some("0.3".to_string()),
        jurisdiction: Some("Indonesia".to_string()),
        data_residency: Some("Indonesia-only (on-shore)".to_string()),
        retention_days: Some(30),
        training_opt_in: Some(false),
        pii_protection: Some(PiiProtection {
            method: Some("Anonymization/Redaction".to_string()),
            tooling: Some("Microsoft Presidio (text/images)".to_string()),
            pii_categories: Some(
                ["Name", "Phone", "Email", "ID Number", "Address", "Account Number"]
                    .map(String::from)
                    .to_vec(),
            ),
            extra: Map::new(),
        }),
        encryption: Some(Encryption {
            at_rest: Some("AES-256".to_string()),
            in_transit: Some("TLS 1.2+".to_string()),
            extra: Map::new(),
        }),
        access_control: Some(AccessControl {
            model: Some("ABAC (role, sensitivity, location, time)".to_string()),
            review_cycle_days: Some(90),
            extra: Map::new(),
        }),
        audit_trail: Some(AuditTrail {
            enabled: Some(true),
            retention_months: Some(12),
            export_format: Some(vec!["CSV".to_string(), "JSONL".to_string()]),
            extra: Map::new(),
        }),
        transparency: Some(Transparency {
            model_card_required: Some(true),
            evaluations_published: Some(
                ["Latency", "Accuracy", "Fairness (AIF360 DI)", "Toxicity"]
                    .map(String::from)
                    .to_vec(),
            ),
            extra: Map::new(),
        }),
        extra: Map::new(),
    }
}

/// The audit trail the console starts with, head-first order.
pub fn seed_audit_events() -> Vec<AuditEvent> {
    vec![
        AuditEvent::new(
            datetime!(2025-11-10 20:05:00 +07:00),
            "svc-rag@bank.local",
            tokens::ACTION_READ,
            "kb:limit-kartu-kredit",
            tokens::OUTCOME_ALLOW,
        ),
        AuditEvent::new(
            datetime!(2025-11-10 20:05:02 +07:00),
            "svc-rag@bank.local",
            tokens::ACTION_RETRIEVE,
            "vec:index#finance-faq",
            tokens::OUTCOME_ALLOW,
        ),
        AuditEvent::new(
            datetime!(2025-11-10 20:05:03 +07:00),
            "svc-policy@bank.local",
            tokens::ACTION_FILTER,
            "policy:pii-redaction",
            tokens::OUTCOME_APPLIED,
        ),
    ]
}

/// The metric sample shown before any evaluation has run.
pub fn seed_metrics() -> MetricSample {
    MetricSample {
        em: 0.78,
        f1: 0.82,
        di: 0.86,
        tox: 0.006,
    }
}

pub fn seed_profile() -> ProjectProfile {
    ProjectProfile {
        name: "CS-AI - FAQ Banking ID".to_string(),
        sector: "Keuangan".to_string(),
        model: "LLM - Multibahasa".to_string(),
        region: "Jakarta (on-shore)".to_string(),
    }
}
