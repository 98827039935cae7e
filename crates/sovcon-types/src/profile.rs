//! Project metadata record.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SECTOR_CHOICES: [&str; 3] = ["Keuangan", "Kesehatan", "Publik"];
pub const MODEL_CHOICES: [&str; 2] = [
    "LLM - Bahasa Indonesia (on-shore)",
    "LLM - Multibahasa",
];
pub const REGION_CHOICES: [&str; 2] = ["Jakarta (on-shore)", "Surabaya DR"];

/// Plain key/value project metadata. Independent of policy and audit state;
/// every field is edited directly and carries no cross-field invariant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectProfile {
    pub name: String,
    pub sector: String,
    pub model: String,
    pub region: String,
}
