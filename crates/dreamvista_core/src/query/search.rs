//! Dream lookup by matched symbol.
//!
//! # Invariants
//! - Symbol lookup is a case-insensitive exact match on the name.
//! - Each dream appears at most once per search, most recent first.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::find_symbol;
use crate::model::dream::{Dream, DreamId};
use crate::store::DreamStore;

/// One dream returned by a symbol search, with the symbol's name and
/// meaning attached for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolSearchHit {
    pub dream: Dream,
    pub symbol: String,
    pub meaning: String,
}

/// Returns all dreams matched against the named symbol.
///
/// An unknown symbol name yields an empty list; it is not an error.
/// Hits are sorted by creation timestamp descending.
pub fn search_by_symbol(store: &DreamStore, name: &str) -> Vec<SymbolSearchHit> {
    let Some(symbol) = find_symbol(store, name) else {
        return Vec::new();
    };

    let dream_ids: HashSet<DreamId> = store
        .interpretations()
        .iter()
        .filter(|interpretation| interpretation.symbol_id == symbol.id)
        .map(|interpretation| interpretation.dream_id)
        .collect();

    let mut hits: Vec<SymbolSearchHit> = store
        .dreams()
        .iter()
        .filter(|dream| dream_ids.contains(&dream.id))
        .map(|dream| SymbolSearchHit {
            dream: dream.clone(),
            symbol: symbol.symbol.clone(),
            meaning: symbol.meaning.clone(),
        })
        .collect();

    hits.sort_by(|a, b| b.dream.created_at.cmp(&a.dream.created_at));
    hits
}
