use crate::model::event_cells;
use sovcon_types::AuditEvent;

/// Render the audit trail as JSONL: one compact JSON object per line, in
/// the order given (head-first for a log export). Keys follow the fixed
/// event column order. An empty trail yields the empty string.
pub fn render_audit_jsonl<'a>(events: impl IntoIterator<Item = &'a AuditEvent>) -> String {
    events
        .into_iter()
        .map(|event| {
            let body = event_cells(event)
                .iter()
                .map(|(key, cell)| format!("\"{key}\":{cell}"))
                .collect::<Vec<_>>()
                .join(",");
            format!("{{{body}}}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
