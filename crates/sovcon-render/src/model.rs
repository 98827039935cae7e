use serde_json::Value as JsonValue;
use sovcon_types::AuditEvent;

/// Encode one cell as a compact JSON literal: strings carry quotes and
/// escapes, numbers and booleans stay bare. A comma or quote inside a value
/// therefore cannot break column alignment.
pub(crate) fn json_cell(value: &JsonValue) -> String {
    value.to_string()
}

/// The event's fields as `(column, encoded cell)` pairs, in the fixed
/// [`AuditEvent::COLUMNS`] order.
pub(crate) fn event_cells(event: &AuditEvent) -> [(&'static str, String); 5] {
    [
        ("time", json_cell(&JsonValue::from(event.time_rfc3339()))),
        ("actor", json_cell(&JsonValue::from(event.actor.as_str()))),
        ("action", json_cell(&JsonValue::from(event.action.as_str()))),
        (
            "resource",
            json_cell(&JsonValue::from(event.resource.as_str())),
        ),
        (
            "outcome",
            json_cell(&JsonValue::from(event.outcome.as_str())),
        ),
    ]
}
