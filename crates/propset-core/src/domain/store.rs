//! The ordered properties collection and its wire format.
//!
//! The supported `.properties` subset is strict: one entry per line, in the
//! form `[#]key=value`, where `=` is the first-occurrence delimiter (the
//! value may itself contain `=`). No escaping, no continuation lines, no
//! free-form comment preservation — a leading `#` is modeled as a boolean
//! flag on the entry, nothing more.

use tracing::trace;

use crate::domain::{Entry, error::DomainError};

/// Ordered sequence of [`Entry`] values.
///
/// Insertion order is significant and survives serialization: new entries
/// are appended, mutated entries keep their position, removed entries are
/// excised without reordering survivors.
///
/// The parser does not deduplicate — a source file with duplicate keys is
/// loaded verbatim, and [`get`](Self::get)/[`remove_first`](Self::remove_first)
/// operate on the first match. Key uniqueness is an invariant maintained by
/// the mutation engine's upsert logic, not enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesStore {
    entries: Vec<Entry>,
}

impl PropertiesStore {
    /// Create an empty store (from-scratch mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse source text into a store.
    ///
    /// Every line is processed. A line is commented when it starts with `#`;
    /// the remainder (after the optional `#`) is split on the first `=`.
    /// A line with no `=` fails with [`DomainError::MalformedLine`] and no
    /// partial store is returned.
    ///
    /// A single trailing newline does not produce a phantom empty line, but
    /// an interior blank line has no `=` and is an error.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let mut entries = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let (commented, rest) = match line.strip_prefix('#') {
                Some(rest) => (true, rest),
                None => (false, line),
            };

            let (key, value) = rest.split_once('=').ok_or_else(|| {
                DomainError::MalformedLine {
                    line: idx + 1,
                    text: line.to_string(),
                }
            })?;

            entries.push(Entry {
                key: key.to_string(),
                value: value.to_string(),
                commented,
            });
        }

        trace!(entries = entries.len(), "Parsed properties source");
        Ok(Self { entries })
    }

    /// First entry whose key matches exactly, in store order.
    ///
    /// First-match semantics are load-bearing when the source contained
    /// duplicate keys.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Mutable variant of [`get`](Self::get).
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.key == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Append an entry at the end of the store.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove the first entry matching `key`, preserving the order of the
    /// survivors. Returns the removed entry, or `None` if the key is absent.
    pub fn remove_first(&mut self, key: &str) -> Option<Entry> {
        let pos = self.entries.iter().position(|e| e.key == key)?;
        Some(self.entries.remove(pos))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to text: one `[#]key=value` line per entry, each terminated
    /// by a single newline, in store order.
    ///
    /// Deterministic and stable: serializing an unmodified store repeatedly
    /// yields identical bytes, and `parse(serialize(s))` reproduces `s`.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.to_string());
            out.push('\n');
        }
        out
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
