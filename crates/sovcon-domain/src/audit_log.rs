//! Append-only audit trail, most recent event first.

use sovcon_types::AuditEvent;
use std::collections::VecDeque;

/// Ordered sequence of audit events. Events are never removed or mutated
/// once appended, and the log grows without bound; retention is a policy
/// statement, not something the console enforces.
#[derive(Clone, Debug, Default)]
pub struct AuditLog {
    events: VecDeque<AuditEvent>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from events already in head-first order.
    pub fn seeded(events: impl IntoIterator<Item = AuditEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// O(1) insert at the head of the sequence.
    pub fn append(&mut self, event: AuditEvent) {
        self.events.push_front(event);
    }

    /// Events in head-first (most recent first) order.
    pub fn events(&self) -> impl Iterator<Item = &AuditEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// CSV export with the fixed `time,actor,action,resource,outcome`
    /// column order; each value is JSON-encoded individually so commas and
    /// quotes inside values cannot break column alignment. Empty log yields
    /// the empty string.
    pub fn export_csv(&self) -> String {
        sovcon_render::render_audit_csv(self.events())
    }

    /// One compact JSON object per line, head-first. Empty log yields the
    /// empty string.
    pub fn export_jsonl(&self) -> String {
        sovcon_render::render_audit_jsonl(self.events())
    }
}
