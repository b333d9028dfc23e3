//! Symbol domain model.
//!
//! # Responsibility
//! - Define the catalog record linking a named dream motif to its meaning.
//! - Keep the on-disk keyword encoding (comma-separated string) stable.
//!
//! # Invariants
//! - `symbol` is unique case-insensitively across the catalog.
//! - A symbol is immutable once created; there is no update or delete.

use serde::{Deserialize, Serialize};

/// Stable identifier for a catalog symbol.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type SymbolId = u64;

/// A named dream motif with an associated interpretive meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Monotonically assigned catalog id.
    pub id: SymbolId,
    /// Display name, matched case-insensitively against dream text.
    pub symbol: String,
    /// Interpretive meaning shown to the user.
    pub meaning: String,
    /// Free-form tone label, e.g. `positive`, `anxious`, `mysterious`.
    pub emotional_tone: String,
    /// Free-form grouping label, e.g. `animal`, `nature`, `structure`.
    pub category: String,
    /// Alternate match terms, checked in order after the symbol name.
    ///
    /// Serialized as one comma-separated string to match the backing file.
    #[serde(with = "keywords_codec")]
    pub keywords: Vec<String>,
}

impl Symbol {
    /// Returns whether `name` equals this symbol's name, ignoring case.
    pub fn name_matches(&self, name: &str) -> bool {
        self.symbol.to_lowercase() == name.to_lowercase()
    }
}

/// Splits a raw comma-separated keyword string into normalized terms.
///
/// Terms are trimmed; empty segments are dropped.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

mod keywords_codec {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(keywords: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&keywords.join(", "))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(super::split_keywords(&raw))
    }
}
