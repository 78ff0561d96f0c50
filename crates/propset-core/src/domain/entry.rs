use std::fmt;

use serde::Serialize;

/// One property line: a key, a raw value, and a commented flag.
///
/// This is the unit a properties file is made of. It contains no parsing
/// logic, only data; the line grammar lives in
/// [`PropertiesStore`](crate::domain::PropertiesStore).
///
/// Keys are case-sensitive and compared exactly. Values are the literal
/// text after the first `=` of the line — no trimming, no escape handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
    /// Serialized with a leading `#` when true. A commented entry is
    /// semantically inactive but retained in the file.
    pub commented: bool,
}

impl Entry {
    /// Create an active (uncommented) entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            commented: false,
        }
    }

    /// Create a commented-out entry.
    pub fn commented(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            commented: true,
            ..Self::new(key, value)
        }
    }

    pub fn is_active(&self) -> bool {
        !self.commented
    }
}

/// Renders the entry as its file line, without a terminator.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.commented {
            write!(f, "#")?;
        }
        write!(f, "{}={}", self.key, self.value)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
