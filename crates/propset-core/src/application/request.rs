//! The structured edit request: four named operation groups.

use std::collections::BTreeMap;

/// A declarative set of edits to apply to a properties store.
///
/// The four groups are applied in a fixed phase order (upserts, then
/// comment, then uncomment, then remove) by the
/// [`engine`](crate::application::engine) — the order in which builder
/// methods are called does not matter.
///
/// Upserts live in a `BTreeMap`, so the upsert phase is deterministic
/// (lexicographic by key). The legacy behavior this tool replaces left that
/// order undefined; deterministic ordering is an explicit enhancement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditRequest {
    upserts: BTreeMap<String, String>,
    comment: Vec<String>,
    uncomment: Vec<String>,
    remove: Vec<String>,
}

impl EditRequest {
    pub fn builder() -> EditRequestBuilder {
        EditRequestBuilder::default()
    }

    /// Key/value pairs to insert or update, keyed by property name.
    pub fn upserts(&self) -> &BTreeMap<String, String> {
        &self.upserts
    }

    /// Keys whose entries should gain a leading `#`.
    pub fn comment_keys(&self) -> &[String] {
        &self.comment
    }

    /// Keys whose entries should lose their leading `#`.
    pub fn uncomment_keys(&self) -> &[String] {
        &self.uncomment
    }

    /// Keys whose entries should be deleted (first match only).
    pub fn remove_keys(&self) -> &[String] {
        &self.remove
    }

    /// `true` when no operation group contains anything.
    pub fn is_noop(&self) -> bool {
        self.upserts.is_empty()
            && self.comment.is_empty()
            && self.uncomment.is_empty()
            && self.remove.is_empty()
    }
}

/// Builder for [`EditRequest`].
#[derive(Debug, Clone, Default)]
pub struct EditRequestBuilder {
    request: EditRequest,
}

impl EditRequestBuilder {
    /// Add an upsert. Repeated calls for the same key are first-seen-wins.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.upserts.entry(key.into()).or_insert(value.into());
        self
    }

    pub fn comment(mut self, key: impl Into<String>) -> Self {
        self.request.comment.push(key.into());
        self
    }

    pub fn uncomment(mut self, key: impl Into<String>) -> Self {
        self.request.uncomment.push(key.into());
        self
    }

    pub fn remove(mut self, key: impl Into<String>) -> Self {
        self.request.remove.push(key.into());
        self
    }

    pub fn build(self) -> EditRequest {
        self.request
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
