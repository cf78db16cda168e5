//! Record data model
//!
//! This module defines the shapes a catalog record passes through on its way
//! to storage:
//! - the raw JSON object decoded from the catalog response
//! - [`ResolvedDocument`], the sanitized, reference-resolved form
//! - [`RecordOutcome`], the tagged fetch result (resolved vs. not found)
//! - [`StoredRecord`], the persisted row wrapper
//!
//! It also declares the fixed table of reference groups ([`REFERENCE_GROUPS`])
//! and the helpers that extract reference links from a raw record.

mod document;

pub use document::{ResolvedDocument, StoredRecord};

use serde_json::{Map, Value};

/// Outcome of fetching a single catalog ID
///
/// Absence is an expected per-ID result, not an error, so it gets its own
/// variant rather than an `Err` or an `Option` buried in other shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// The record exists and all its references were resolved
    Resolved(ResolvedDocument),

    /// The catalog returned a non-success status for this ID
    NotFound,
}

impl RecordOutcome {
    /// Returns the resolved document, consuming the outcome, or `None`
    pub fn into_document(self) -> Option<ResolvedDocument> {
        match self {
            Self::Resolved(doc) => Some(doc),
            Self::NotFound => None,
        }
    }

    /// True if this outcome is `NotFound`
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// A reference group: a raw-record field holding URLs to other catalog
/// resources, and the display attribute to extract from each of them.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceGroup {
    /// Field name on the raw record (and on the resolved document)
    pub field: &'static str,

    /// Attribute read from each referenced resource
    pub attribute: &'static str,

    /// Whether the field holds a single URL instead of a list
    pub scalar: bool,
}

/// The five reference groups carried by every people record.
///
/// Films use `title` as their display attribute; everything else uses `name`.
/// Homeworld is the one scalar group and is normalized to a one-element list
/// before resolution.
pub const REFERENCE_GROUPS: [ReferenceGroup; 5] = [
    ReferenceGroup {
        field: "films",
        attribute: "title",
        scalar: false,
    },
    ReferenceGroup {
        field: "starships",
        attribute: "name",
        scalar: false,
    },
    ReferenceGroup {
        field: "vehicles",
        attribute: "name",
        scalar: false,
    },
    ReferenceGroup {
        field: "species",
        attribute: "name",
        scalar: false,
    },
    ReferenceGroup {
        field: "homeworld",
        attribute: "name",
        scalar: true,
    },
];

/// Extracts the reference links for one group from a raw record.
///
/// List groups with a missing field yield an empty list. The scalar group
/// yields a one-element list, or an empty list when the field is missing or
/// holds an empty string. Non-string entries inside a list are skipped.
pub fn reference_links(raw: &Map<String, Value>, group: &ReferenceGroup) -> Vec<String> {
    match raw.get(group.field) {
        Some(Value::Array(urls)) if !group.scalar => urls
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect(),
        Some(Value::String(url)) if group.scalar && !url.is_empty() => vec![url.clone()],
        _ => Vec::new(),
    }
}
