//! The policy store: a single mutable document with replace-by-import,
//! dotted-path field edits, and pretty-printed export.

use crate::error::PolicyError;
use serde_json::{Map, Value as JsonValue};
use sovcon_types::PolicyDocument;

#[derive(Clone, Debug, Default)]
pub struct PolicyStore {
    doc: PolicyDocument,
}

impl PolicyStore {
    pub fn new(doc: PolicyDocument) -> Self {
        Self { doc }
    }

    pub fn document(&self) -> &PolicyDocument {
        &self.doc
    }

    /// Wholesale replacement with an already-typed document.
    pub fn replace(&mut self, doc: PolicyDocument) {
        self.doc = doc;
    }

    /// Parse `text` and replace the current document. Import is permissive:
    /// any JSON object is accepted, unknown keys pass through untouched, and
    /// no semantic validation happens. On failure the current document is
    /// left unchanged.
    pub fn replace_from_json(&mut self, text: &str) -> Result<(), PolicyError> {
        let doc: PolicyDocument = serde_json::from_str(text).map_err(PolicyError::Parse)?;
        self.doc = doc;
        Ok(())
    }

    /// Merge one field into the document at a dotted path, e.g.
    /// `"pii_protection.method"`. Sibling fields of the addressed group are
    /// preserved; missing intermediate groups are created; paths outside the
    /// known schema land in the passthrough maps. Fails only when the value
    /// type-conflicts with a known key, in which case the document is left
    /// unchanged.
    pub fn set_field(&mut self, path: &str, value: JsonValue) -> Result<(), PolicyError> {
        let mut root = serde_json::to_value(&self.doc).map_err(PolicyError::Export)?;
        if let JsonValue::Object(map) = &mut root {
            set_path(map, path, value);
        }
        let updated: PolicyDocument =
            serde_json::from_value(root).map_err(|source| PolicyError::IncompatibleValue {
                path: path.to_string(),
                source,
            })?;
        self.doc = updated;
        Ok(())
    }

    /// Pretty-printed serialization (2-space indent). Round-trips through
    /// [`PolicyStore::replace_from_json`].
    pub fn export_json(&self) -> Result<String, PolicyError> {
        serde_json::to_string_pretty(&self.doc).map_err(PolicyError::Export)
    }
}

fn set_path(target: &mut Map<String, JsonValue>, path: &str, value: JsonValue) {
    match path.split_once('.') {
        None => {
            target.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let slot = target
                .entry(head.to_string())
                .or_insert_with(|| JsonValue::Object(Map::new()));
            if !slot.is_object() {
                *slot = JsonValue::Object(Map::new());
            }
            if let JsonValue::Object(map) = slot {
                set_path(map, rest, value);
            }
        }
    }
}
