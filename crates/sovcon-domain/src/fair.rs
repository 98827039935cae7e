//! FAIR data checklist derived from the current policy document.
//!
//! Light heuristic scoring: findable and interoperable are constitutive
//! (project metadata and JSON/CSV exports always exist), accessible and
//! reusable are read off the policy.

use serde::Serialize;
use sovcon_types::PolicyDocument;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FairScore {
    pub findable: bool,
    pub accessible: bool,
    pub interoperable: bool,
    pub reusable: bool,
    /// Fraction of the four criteria that hold.
    pub score: f64,
}

pub fn fair_score(policy: &PolicyDocument) -> FairScore {
    let findable = true;
    let interoperable = true;
    let accessible = policy
        .audit_trail
        .as_ref()
        .and_then(|a| a.enabled)
        .unwrap_or(false)
        && policy
            .access_control
            .as_ref()
            .and_then(|a| a.model.as_deref())
            .is_some_and(|m| !m.is_empty());
    let reusable = policy
        .transparency
        .as_ref()
        .and_then(|t| t.model_card_required)
        .unwrap_or(false);

    let held = [findable, accessible, interoperable, reusable]
        .iter()
        .filter(|c| **c)
        .count();
    FairScore {
        findable,
        accessible,
        interoperable,
        reusable,
        score: held as f64 / 4.0,
    }
}
