use crate::model::{event_cells, json_cell};
use serde_json::{Map, Value as JsonValue};
use sovcon_types::AuditEvent;

/// Render the audit trail as CSV in the fixed
/// `time,actor,action,resource,outcome` column order, one event per line in
/// the order given (head-first for a log export). Every value is
/// JSON-encoded individually. An empty trail yields the empty string, with
/// no header line.
pub fn render_audit_csv<'a>(events: impl IntoIterator<Item = &'a AuditEvent>) -> String {
    let mut lines: Vec<String> = Vec::new();
    for event in events {
        if lines.is_empty() {
            lines.push(AuditEvent::COLUMNS.join(","));
        }
        let cells = event_cells(event);
        lines.push(
            cells
                .iter()
                .map(|(_, cell)| cell.as_str())
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// Generic CSV encoder over arbitrary JSON rows. The header is derived from
/// the first row's keys only; every row emits its own values in its own key
/// order. Rows with heterogeneous shapes therefore misalign silently - the
/// audit exporters avoid this by construction (fixed event schema), and
/// callers of this function are expected to pass uniform rows.
pub fn csv_from_rows(rows: &[Map<String, JsonValue>]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };
    let mut lines = vec![first.keys().cloned().collect::<Vec<_>>().join(",")];
    for row in rows {
        lines.push(
            row.values()
                .map(json_cell)
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}
