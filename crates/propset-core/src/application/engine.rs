//! The mutation engine: one fixed-order edit pass over a store.
//!
//! Phase order is part of the contract — it determines the outcome when the
//! same key appears in more than one operation group:
//!
//! 1. Upserts (all of them, before any other phase)
//! 2. Comment
//! 3. Uncomment
//! 4. Remove
//!
//! The engine never fails. Precondition validation (from-scratch rules,
//! output checks) is the caller's job; keys that are absent during the
//! comment/uncomment/remove phases are silently ignored so that repeated or
//! speculative requests stay idempotent.

use tracing::debug;

use crate::application::request::EditRequest;
use crate::domain::{Entry, PropertiesStore};

/// Apply `request` to `store` in place.
pub fn apply(store: &mut PropertiesStore, request: &EditRequest) {
    // Phase 1: upserts. A new key appends an active entry at the end; an
    // existing key gets its value overwritten, keeping its position and its
    // commented flag.
    for (key, value) in request.upserts() {
        match store.get_mut(key) {
            Some(entry) => entry.value = value.clone(),
            None => store.push(Entry::new(key.clone(), value.clone())),
        }
    }

    // Phase 2: comment.
    for key in request.comment_keys() {
        if let Some(entry) = store.get_mut(key) {
            entry.commented = true;
        }
    }

    // Phase 3: uncomment.
    for key in request.uncomment_keys() {
        if let Some(entry) = store.get_mut(key) {
            entry.commented = false;
        }
    }

    // Phase 4: remove. First match only, per store lookup semantics.
    for key in request.remove_keys() {
        store.remove_first(key);
    }

    debug!(
        upserts = request.upserts().len(),
        comment = request.comment_keys().len(),
        uncomment = request.uncomment_keys().len(),
        remove = request.remove_keys().len(),
        entries = store.len(),
        "Mutation pass applied"
    );
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn store(text: &str) -> PropertiesStore {
        PropertiesStore::parse(text).unwrap()
    }

    #[test]
    fn upsert_appends_new_key_as_active() {
        let mut s = store("key1=val1\n");
        apply(&mut s, &EditRequest::builder().set("key2", "val2").build());
        assert_eq!(s.serialize(), "key1=val1\nkey2=val2\n");
        assert!(s.get("key2").unwrap().is_active());
    }

    #[test]
    fn upsert_overwrites_value_only() {
        let mut s = store("key1=old\n#key2=old\n");
        let request = EditRequest::builder()
            .set("key1", "new")
            .set("key2", "new")
            .build();
        apply(&mut s, &request);

        // Values change; positions and commented flags do not.
        assert_eq!(s.serialize(), "key1=new\n#key2=new\n");
    }

    #[test]
    fn new_keys_append_in_deterministic_order() {
        let mut s = store("key1=val1\n");
        let request = EditRequest::builder()
            .set("zeta", "z")
            .set("alpha", "a")
            .build();
        apply(&mut s, &request);
        // BTreeMap iteration: lexicographic append order.
        assert_eq!(s.serialize(), "key1=val1\nalpha=a\nzeta=z\n");
    }

    #[test]
    fn comment_sets_flag_and_ignores_absent_keys() {
        let mut s = store("key1=val1\n");
        let request = EditRequest::builder()
            .comment("key1")
            .comment("missing")
            .build();
        apply(&mut s, &request);
        assert_eq!(s.serialize(), "#key1=val1\n");
    }

    #[test]
    fn uncomment_clears_flag_and_ignores_absent_keys() {
        let mut s = store("#key1=val1\n");
        let request = EditRequest::builder()
            .uncomment("key1")
            .uncomment("missing")
            .build();
        apply(&mut s, &request);
        assert_eq!(s.serialize(), "key1=val1\n");
    }

    #[test]
    fn comment_already_commented_is_noop() {
        let mut s = store("#key2=val2\n");
        apply(&mut s, &EditRequest::builder().comment("key2").build());
        assert_eq!(s.serialize(), "#key2=val2\n");
    }

    #[test]
    fn remove_excises_without_reordering() {
        let mut s = store("key1=val1\nkey2=val2\nkey3=val3\n");
        apply(&mut s, &EditRequest::builder().remove("key2").build());
        assert_eq!(s.serialize(), "key1=val1\nkey3=val3\n");
    }

    #[test]
    fn remove_only_deletes_first_duplicate() {
        let mut s = store("dup=first\ndup=second\n");
        apply(&mut s, &EditRequest::builder().remove("dup").build());
        assert_eq!(s.serialize(), "dup=second\n");
    }

    #[test]
    fn remove_absent_key_is_silent() {
        let mut s = store("key1=val1\n");
        apply(&mut s, &EditRequest::builder().remove("missing").build());
        assert_eq!(s.serialize(), "key1=val1\n");
    }

    #[test]
    fn upserts_run_before_comment_phase() {
        // A key both upserted and commented in the same request ends up
        // present *and* commented: the upsert appends it active, then the
        // comment phase flags it.
        let mut s = PropertiesStore::new();
        let request = EditRequest::builder()
            .set("key2", "val2")
            .comment("key2")
            .build();
        apply(&mut s, &request);
        assert_eq!(s.serialize(), "#key2=val2\n");
    }

    #[test]
    fn remove_runs_last() {
        // Upserted, commented, then removed: the remove phase wins.
        let mut s = store("key1=val1\n");
        let request = EditRequest::builder()
            .set("key1", "new")
            .comment("key1")
            .remove("key1")
            .build();
        apply(&mut s, &request);
        assert!(s.is_empty());
    }

    #[test]
    fn uncomment_after_comment_in_same_request() {
        // Phases, not call order: uncomment always runs after comment.
        let mut s = store("key1=val1\n");
        let request = EditRequest::builder()
            .uncomment("key1")
            .comment("key1")
            .build();
        apply(&mut s, &request);
        assert!(s.get("key1").unwrap().is_active());
    }
}
