//! Dream journal use-case service.
//!
//! # Responsibility
//! - Tie text analysis to dream/interpretation persistence.
//! - Flush the whole dataset after every successful mutation.
//!
//! # Invariants
//! - An analysis with no matches persists nothing.
//! - Save failures are reported and logged, never raised; the in-memory
//!   records from the current operation are retained.

use chrono::{Local, NaiveDateTime};
use log::{error, info, warn};
use std::path::PathBuf;

use crate::analyze::{match_symbols, SymbolMatch};
use crate::catalog::{self, CatalogResult, NewSymbol};
use crate::model::dream::Dream;
use crate::model::interpretation::Interpretation;
use crate::model::symbol::SymbolId;
use crate::query::{self, DreamStatistics, SymbolSearchHit};
use crate::store::DreamStore;

/// Persistence options for one analysis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Whether a matching analysis records a dream and its interpretations.
    pub persist: bool,
    /// Optional mood noted before sleep, stored on the dream record.
    pub mood_before: Option<String>,
    /// Whether the user flagged the dream as recurring.
    pub recurring: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            persist: true,
            mood_before: None,
            recurring: false,
        }
    }
}

/// Facade owning the store, constructed once per process/session.
pub struct DreamService {
    store: DreamStore,
}

impl DreamService {
    /// Opens the backing document at `path` and wraps it in a service.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(DreamStore::open(path))
    }

    /// Wraps an already-opened store.
    pub fn new(store: DreamStore) -> Self {
        Self { store }
    }

    /// Read access for presentation needs not covered by the query layer.
    pub fn store(&self) -> &DreamStore {
        &self.store
    }

    /// Analyzes dream text with default options (persistence enabled).
    pub fn analyze_dream(&mut self, text: &str) -> Vec<SymbolMatch> {
        self.analyze_dream_with(text, &AnalyzeOptions::default())
    }

    /// Analyzes dream text against the catalog.
    ///
    /// # Contract
    /// - Returns matches in catalog order; empty means no recognized symbols.
    /// - With `persist` and at least one match: records one dream plus one
    ///   interpretation per match, then flushes the dataset once.
    pub fn analyze_dream_with(&mut self, text: &str, options: &AnalyzeOptions) -> Vec<SymbolMatch> {
        let matches = match_symbols(self.store.symbols(), text);
        if options.persist && !matches.is_empty() {
            self.record_analysis(text, &matches, options, Local::now().naive_local());
        }
        matches
    }

    fn record_analysis(
        &mut self,
        text: &str,
        matches: &[SymbolMatch],
        options: &AnalyzeOptions,
        recorded_at: NaiveDateTime,
    ) {
        let dream_id = self.store.next_dream_id();
        let mut dream = Dream::new(dream_id, text, recorded_at);
        dream.mood_before = options.mood_before.clone();
        dream.recurring = options.recurring;
        self.store.append_dream(dream);

        for matched in matches {
            let interpretation = Interpretation {
                id: self.store.next_interpretation_id(),
                dream_id,
                symbol_id: matched.symbol.id,
                relevance_score: matched.relevance,
            };
            // Matches come straight from the catalog, so the reference
            // check only fails on a store-level inconsistency.
            if let Err(err) = self.store.append_interpretation(interpretation) {
                error!(
                    "event=interpretation_rejected module=service status=error dream_id={dream_id} symbol_id={} error={err}",
                    matched.symbol.id
                );
            }
        }

        info!(
            "event=dream_recorded module=service status=ok dream_id={dream_id} interpretations={}",
            matches.len()
        );
        self.flush("dream_recorded");
    }

    /// Adds a user-defined symbol to the catalog and flushes on success.
    ///
    /// # Errors
    /// - `CatalogError::DuplicateSymbol`; no partial write happens.
    pub fn add_symbol(&mut self, request: &NewSymbol) -> CatalogResult<SymbolId> {
        let id = catalog::add_symbol(&mut self.store, request)?;
        info!(
            "event=symbol_added module=service status=ok symbol_id={id} symbol={}",
            request.symbol
        );
        self.flush("symbol_added");
        Ok(id)
    }

    /// Journal-wide statistics; empty store yields zero/empty fields.
    pub fn statistics(&self) -> DreamStatistics {
        query::statistics(&self.store)
    }

    /// All dreams matched against the named symbol, most recent first.
    pub fn search_by_symbol(&self, name: &str) -> Vec<SymbolSearchHit> {
        query::search_by_symbol(&self.store, name)
    }

    fn flush(&self, action: &str) {
        if let Err(err) = self.store.save() {
            warn!(
                "event=store_save module=service status=error action={action} error={err}"
            );
        }
    }
}
