//! Dream domain model.
//!
//! # Responsibility
//! - Define the record persisted for every analyzed dream submission.
//! - Keep timestamp encodings compatible with the original data file.
//!
//! # Invariants
//! - `created_at` carries second precision, matching the on-disk encoding.
//! - A dream is immutable after creation; there is no update or delete.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Stable identifier for a recorded dream.
pub type DreamId = u64;

/// On-disk timestamp layout for [`Dream::created_at`].
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A submitted dream description with recording metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dream {
    /// Monotonically assigned journal id.
    pub id: DreamId,
    /// Raw text exactly as the user submitted it.
    pub dream_text: String,
    /// Calendar date the dream was recorded, serialized as `%Y-%m-%d`.
    pub dream_date: NaiveDate,
    /// Optional mood noted before sleep.
    pub mood_before: Option<String>,
    /// Whether the user flagged this as a recurring dream.
    pub recurring: bool,
    /// Recording timestamp, serialized as `%Y-%m-%d %H:%M:%S`.
    #[serde(with = "created_at_codec")]
    pub created_at: NaiveDateTime,
}

impl Dream {
    /// Creates a dream record from raw text at the given instant.
    ///
    /// # Invariants
    /// - `dream_date` is derived from `recorded_at`.
    /// - Subsecond precision is dropped so in-memory and persisted values
    ///   compare equal after a round-trip.
    pub fn new(id: DreamId, dream_text: impl Into<String>, recorded_at: NaiveDateTime) -> Self {
        let created_at = recorded_at.with_nanosecond(0).unwrap_or(recorded_at);
        Self {
            id,
            dream_text: dream_text.into(),
            dream_date: created_at.date(),
            mood_before: None,
            recurring: false,
            created_at,
        }
    }
}

mod created_at_codec {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::CREATED_AT_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(CREATED_AT_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, CREATED_AT_FORMAT).map_err(de::Error::custom)
    }
}
