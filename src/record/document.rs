//! Resolved and stored document types

use serde_json::{Map, Value};

/// Fields stripped from every raw record before resolution.
///
/// These are server bookkeeping the flattened document does not carry; `url`
/// in particular would duplicate the identity that the explicit `id` field
/// already pins to the requested catalog ID.
const TRANSIENT_FIELDS: [&str; 3] = ["created", "edited", "url"];

/// A sanitized catalog record with every reference group resolved to a
/// joined display string.
///
/// Invariants:
/// - never contains `created`, `edited`, or `url`
/// - `id` equals the catalog ID that was requested, not any identity the
///   response body carried
/// - after resolution, every reference-group field is a JSON string
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDocument {
    fields: Map<String, Value>,
}

impl ResolvedDocument {
    /// Builds a document from a raw response body: strips the transient
    /// fields and forces `id` to the requested catalog ID.
    ///
    /// Reference groups still hold their raw URL values at this point; the
    /// fetcher overwrites them via [`set_field`](Self::set_field) once each
    /// group resolves.
    pub fn from_raw(mut raw: Map<String, Value>, id: u64) -> Self {
        for field in TRANSIENT_FIELDS {
            raw.remove(field);
        }
        raw.insert("id".to_string(), Value::from(id));
        Self { fields: raw }
    }

    /// The catalog ID this document was fetched under
    pub fn id(&self) -> u64 {
        self.fields
            .get("id")
            .and_then(Value::as_u64)
            .unwrap_or_default()
    }

    /// Overwrites a field with a resolved string value
    pub fn set_field(&mut self, field: &str, value: String) {
        self.fields.insert(field.to_string(), Value::String(value));
    }

    /// Read access to a field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The document as a JSON value, for serialization into storage
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// A persisted row: a storage-assigned surrogate ID and one resolved
/// document kept verbatim as an opaque blob.
///
/// Nothing ties the surrogate ID to the catalog ID; re-ingesting the catalog
/// appends duplicate rows by design.
#[derive(Debug, Clone)]
pub struct StoredRecord {
    pub id: i64,
    pub document: Value,
}

impl StoredRecord {
    /// The catalog ID embedded in the stored document, if present
    pub fn catalog_id(&self) -> Option<u64> {
        self.document.get("id").and_then(Value::as_u64)
    }
}
