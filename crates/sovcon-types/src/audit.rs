//! Audit trail event shape.
//!
//! Events are created only by system-internal actions (imports, evaluation
//! runs) and are immutable once appended to a log.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditEvent {
    /// Event time, RFC 3339 on the wire.
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub time: OffsetDateTime,
    pub actor: String,
    pub action: String,
    pub resource: String,
    pub outcome: String,
}

impl AuditEvent {
    /// Fixed column order for tabular exports. Deriving the header from the
    /// event schema (rather than from whichever row happens to come first)
    /// keeps exported columns aligned.
    pub const COLUMNS: [&'static str; 5] = ["time", "actor", "action", "resource", "outcome"];

    pub fn new(
        time: OffsetDateTime,
        actor: impl Into<String>,
        action: impl Into<String>,
        resource: impl Into<String>,
        outcome: impl Into<String>,
    ) -> Self {
        Self {
            time,
            actor: actor.into(),
            action: action.into(),
            resource: resource.into(),
            outcome: outcome.into(),
        }
    }

    /// The event time as an RFC 3339 string, matching the serialized form.
    /// Falls back to the `Display` form for datetimes outside the RFC 3339
    /// range rather than failing.
    pub fn time_rfc3339(&self) -> String {
        self.time
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_else(|_| self.time.to_string())
    }
}
