//! Interpretation domain model.
//!
//! # Invariants
//! - `dream_id` and `symbol_id` reference existing records at creation time.
//! - An interpretation is immutable after creation.

use serde::{Deserialize, Serialize};

use crate::model::dream::DreamId;
use crate::model::symbol::SymbolId;

/// Stable identifier for an interpretation record.
pub type InterpretationId = u64;

/// Join record linking one dream to one matched symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    /// Monotonically assigned id.
    pub id: InterpretationId,
    /// The dream this interpretation belongs to.
    pub dream_id: DreamId,
    /// The catalog symbol matched in the dream text.
    pub symbol_id: SymbolId,
    /// Fixed match weight: 10 for a name match, 7 for a keyword match.
    pub relevance_score: u8,
}
