//! Frequency statistics over interpretations.
//!
//! # Invariants
//! - Symbol frequencies are ranked by descending count; ties keep the
//!   order of first occurrence in the interpretation scan.
//! - Interpretations whose symbol no longer resolves are skipped.

use serde::Serialize;

use crate::store::DreamStore;

const COMMON_SYMBOL_LIMIT: usize = 5;

/// How often one symbol was matched across all recorded dreams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolFrequency {
    pub symbol: String,
    pub frequency: usize,
}

/// Occurrence count of one emotional-tone label across interpretations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToneCount {
    pub emotional_tone: String,
    pub count: usize,
}

/// Aggregate report over the whole journal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DreamStatistics {
    pub total_dreams: usize,
    /// Up to five most frequent symbols, descending.
    pub common_symbols: Vec<SymbolFrequency>,
    /// Tone label counts in first-seen order.
    pub emotional_tones: Vec<ToneCount>,
}

/// Computes journal statistics from the in-memory collections.
///
/// An empty store yields zero totals and empty lists.
pub fn statistics(store: &DreamStore) -> DreamStatistics {
    let mut frequencies: Vec<SymbolFrequency> = Vec::new();
    let mut tones: Vec<ToneCount> = Vec::new();

    for interpretation in store.interpretations() {
        let Some(symbol) = store
            .symbols()
            .iter()
            .find(|symbol| symbol.id == interpretation.symbol_id)
        else {
            continue;
        };

        match frequencies
            .iter_mut()
            .find(|entry| entry.symbol == symbol.symbol)
        {
            Some(entry) => entry.frequency += 1,
            None => frequencies.push(SymbolFrequency {
                symbol: symbol.symbol.clone(),
                frequency: 1,
            }),
        }

        match tones
            .iter_mut()
            .find(|entry| entry.emotional_tone == symbol.emotional_tone)
        {
            Some(entry) => entry.count += 1,
            None => tones.push(ToneCount {
                emotional_tone: symbol.emotional_tone.clone(),
                count: 1,
            }),
        }
    }

    // Stable sort: equal frequencies keep their first-seen order.
    frequencies.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    frequencies.truncate(COMMON_SYMBOL_LIMIT);

    DreamStatistics {
        total_dreams: store.dreams().len(),
        common_symbols: frequencies,
        emotional_tones: tones,
    }
}
