//! Edit Service - main application orchestrator.
//!
//! This service coordinates the entire edit workflow:
//! 1. Validate the request against the operating mode
//! 2. Parse the source (or start from an empty store)
//! 3. Run the mutation engine
//! 4. Serialize and persist the result
//!
//! It implements the driving port (incoming) and uses the driven
//! `Filesystem` port (outgoing). The parse → mutate → serialize core is a
//! pure function with no I/O; the file-backed methods are a thin layer over
//! it.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, engine, ports::Filesystem, request::EditRequest},
    domain::PropertiesStore,
    error::PropsetResult,
};

/// Result of one edit pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// The serialized properties text, ready to persist.
    pub text: String,
    /// `true` when the store content differs from its pre-mutation state.
    /// Content-based, not "operation attempted": editing a key to the value
    /// it already has reports `false`.
    pub changed: bool,
}

/// Main edit service.
///
/// Orchestrates the parse, mutate, serialize, and persist workflow. Each
/// invocation is a single atomic read-modify-write pass; the service holds
/// no state between calls beyond its filesystem adapter.
pub struct EditService {
    filesystem: Box<dyn Filesystem>,
}

impl EditService {
    /// Create a new edit service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// The pure core: apply `request` to `source` and return the result.
    ///
    /// `source = None` is from-scratch mode: the store starts empty and the
    /// request must contain at least one upsert
    /// ([`ApplicationError::NothingToWrite`] otherwise). Parse failures
    /// propagate as `DomainError`; the engine itself never fails.
    pub fn edit(source: Option<&str>, request: &EditRequest) -> PropsetResult<EditOutcome> {
        if source.is_none() && request.upserts().is_empty() {
            return Err(ApplicationError::NothingToWrite.into());
        }

        let mut store = match source {
            Some(text) => PropertiesStore::parse(text)?,
            None => PropertiesStore::new(),
        };

        let before = store.serialize();
        engine::apply(&mut store, request);
        let text = store.serialize();
        let changed = text != before;

        Ok(EditOutcome { text, changed })
    }

    /// Read side of the file workflow: validate, read the source through
    /// the filesystem port, and run [`edit`](Self::edit) — without writing.
    ///
    /// This is the dry-run ("check mode") entry point; it performs exactly
    /// the validation and I/O failure behavior of [`apply`](Self::apply) up
    /// to the write step.
    #[instrument(skip_all, fields(output = %output.display()))]
    pub fn plan(
        &self,
        input: Option<&Path>,
        output: &Path,
        request: &EditRequest,
    ) -> PropsetResult<EditOutcome> {
        if output.as_os_str().is_empty() {
            return Err(ApplicationError::MissingOutput.into());
        }

        let source = match input {
            Some(path) => Some(self.filesystem.read_to_string(path)?),
            None => None,
        };

        Self::edit(source.as_deref(), request)
    }

    /// Full workflow: [`plan`](Self::plan), then persist the result to
    /// `output`. Any failure before the write step leaves the output file
    /// untouched — there are no partial writes.
    #[instrument(skip_all, fields(output = %output.display()))]
    pub fn apply(
        &self,
        input: Option<&Path>,
        output: &Path,
        request: &EditRequest,
    ) -> PropsetResult<EditOutcome> {
        let outcome = self.plan(input, output, request)?;

        self.filesystem.write_file(output, &outcome.text)?;

        info!(
            changed = outcome.changed,
            bytes = outcome.text.len(),
            "Edit applied"
        );
        Ok(outcome)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::DomainError;
    use crate::error::PropsetError;

    // ── edit: validation ──────────────────────────────────────────────────

    #[test]
    fn from_scratch_without_upserts_is_invalid() {
        let request = EditRequest::builder().build();
        let err = EditService::edit(None, &request).unwrap_err();
        assert!(matches!(
            err,
            PropsetError::Application(ApplicationError::NothingToWrite)
        ));
    }

    #[test]
    fn from_scratch_with_only_removes_is_invalid() {
        // comment/uncomment/remove alone cannot populate an empty store.
        let request = EditRequest::builder().remove("key1").build();
        assert!(EditService::edit(None, &request).is_err());
    }

    #[test]
    fn existing_source_without_upserts_is_valid() {
        let request = EditRequest::builder().remove("key1").build();
        let outcome = EditService::edit(Some("key1=val1\n"), &request).unwrap();
        assert_eq!(outcome.text, "");
        assert!(outcome.changed);
    }

    // ── edit: scenarios from the module contract ──────────────────────────

    #[test]
    fn from_scratch_builds_file_in_upsert_order() {
        // Scenario: no source, three upserts, one of them commented.
        let request = EditRequest::builder()
            .set("key1", "val1")
            .set("key2", "val2")
            .set("key3", "val3")
            .comment("key2")
            .build();
        let outcome = EditService::edit(None, &request).unwrap();
        assert_eq!(outcome.text, "key1=val1\n#key2=val2\nkey3=val3\n");
        assert!(outcome.changed);
    }

    #[test]
    fn edit_existing_combined_operations() {
        // Scenario: comment a key that is already commented (no-op),
        // uncomment one that is already active (no-op), remove one, append
        // one.
        let source = "key1=val1\n#key2=val2\nkey3=val3\n";
        let request = EditRequest::builder()
            .comment("key2")
            .uncomment("key1")
            .remove("key3")
            .set("another.key", "anotherValue")
            .build();
        let outcome = EditService::edit(Some(source), &request).unwrap();
        assert_eq!(
            outcome.text,
            "key1=val1\n#key2=val2\nanother.key=anotherValue\n"
        );
        assert!(outcome.changed);
    }

    #[test]
    fn parse_failure_propagates_and_produces_no_output() {
        let request = EditRequest::builder().set("key1", "val1").build();
        let err = EditService::edit(Some("malformed_line_without_equals\n"), &request).unwrap_err();
        assert!(matches!(
            err,
            PropsetError::Domain(DomainError::MalformedLine { line: 1, .. })
        ));
    }

    // ── edit: changed flag is content-based ───────────────────────────────

    #[test]
    fn noop_edit_reports_unchanged() {
        let source = "key1=val1\n";
        let request = EditRequest::builder().set("key1", "val1").build();
        let outcome = EditService::edit(Some(source), &request).unwrap();
        assert_eq!(outcome.text, source);
        assert!(!outcome.changed);
    }

    #[test]
    fn removing_absent_key_reports_unchanged() {
        let source = "key1=val1\n";
        let request = EditRequest::builder()
            .set("key1", "val1")
            .remove("missing")
            .build();
        let outcome = EditService::edit(Some(source), &request).unwrap();
        assert!(!outcome.changed);
    }

    #[test]
    fn uncommenting_active_key_reports_unchanged() {
        let request = EditRequest::builder().uncomment("key1").build();
        let outcome = EditService::edit(Some("key1=val1\n"), &request).unwrap();
        assert!(!outcome.changed);
    }

    #[test]
    fn value_change_reports_changed() {
        let request = EditRequest::builder().set("key1", "other").build();
        let outcome = EditService::edit(Some("key1=val1\n"), &request).unwrap();
        assert!(outcome.changed);
    }

    // ── edit: idempotence ─────────────────────────────────────────────────

    #[test]
    fn applying_twice_is_idempotent() {
        let request = EditRequest::builder()
            .set("key1", "val1")
            .comment("key2")
            .build();
        let first = EditService::edit(Some("key2=val2\n"), &request).unwrap();
        assert!(first.changed);

        let second = EditService::edit(Some(&first.text), &request).unwrap();
        assert_eq!(second.text, first.text);
        assert!(!second.changed);
    }
}
