//! Whole-document store over one JSON backing file.
//!
//! # Responsibility
//! - Read the backing document at open, seeding defaults when absent.
//! - Append records with monotonic ids and reference checks.
//! - Flush the full dataset back to disk on demand.
//!
//! # Invariants
//! - `open` never fails; load problems fall back to a seeded catalog.
//! - Next id per collection is `max existing + 1`, or 1 when empty.
//! - Save failures leave the in-memory collections untouched.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{error, info};
use serde::{Deserialize, Serialize};

use super::{StoreError, StoreResult};
use crate::catalog::defaults::default_symbols;
use crate::model::dream::{Dream, DreamId};
use crate::model::interpretation::{Interpretation, InterpretationId};
use crate::model::symbol::{Symbol, SymbolId};

/// Serialized shape of the backing file: three top-level arrays.
///
/// Missing arrays deserialize as empty so older or hand-edited files
/// still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DreamDocument {
    #[serde(default)]
    pub symbols: Vec<Symbol>,
    #[serde(default)]
    pub dreams: Vec<Dream>,
    #[serde(default)]
    pub interpretations: Vec<Interpretation>,
}

/// In-memory dataset bound to its on-disk JSON document.
///
/// Constructed once per process/session; the store exclusively owns the
/// on-disk representation for its lifetime.
pub struct DreamStore {
    path: PathBuf,
    document: DreamDocument,
}

impl DreamStore {
    /// Opens the store at `path`, loading the backing document.
    ///
    /// # Contract
    /// - Absent file: seeds the default catalog and writes a fresh document.
    /// - Unreadable or corrupt file: logs the failure, then seeds and
    ///   rewrites the same way. Construction itself never fails.
    ///
    /// # Side effects
    /// - Emits `store_load` events with duration and collection counts.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let started_at = Instant::now();

        match read_document(&path) {
            Ok(Some(document)) => {
                let store = Self { path, document };
                info!(
                    "event=store_load module=store status=ok duration_ms={} symbols={} dreams={} interpretations={}",
                    started_at.elapsed().as_millis(),
                    store.document.symbols.len(),
                    store.document.dreams.len(),
                    store.document.interpretations.len()
                );
                store
            }
            Ok(None) => {
                info!(
                    "event=store_load module=store status=seeded duration_ms={} reason=missing_file",
                    started_at.elapsed().as_millis()
                );
                Self::seeded(path)
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error duration_ms={} error_code=document_unreadable error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Self::seeded(path)
            }
        }
    }

    /// Builds a store holding only the default catalog and writes it out.
    fn seeded(path: PathBuf) -> Self {
        let store = Self {
            path,
            document: DreamDocument {
                symbols: default_symbols(),
                ..DreamDocument::default()
            },
        };
        if let Err(err) = store.save() {
            error!(
                "event=store_save module=store status=error error_code=seed_write_failed error={err}"
            );
        }
        store
    }

    /// Serializes all three collections and overwrites the backing document.
    ///
    /// # Errors
    /// - Returns `StoreError::Serde` or `StoreError::Io`; in-memory state is
    ///   unchanged either way, so the failure is safe to treat as non-fatal.
    pub fn save(&self) -> StoreResult<()> {
        let payload = serde_json::to_string_pretty(&self.document)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.document.symbols
    }

    pub fn dreams(&self) -> &[Dream] {
        &self.document.dreams
    }

    pub fn interpretations(&self) -> &[Interpretation] {
        &self.document.interpretations
    }

    pub fn next_symbol_id(&self) -> SymbolId {
        next_id(self.document.symbols.iter().map(|symbol| symbol.id))
    }

    pub fn next_dream_id(&self) -> DreamId {
        next_id(self.document.dreams.iter().map(|dream| dream.id))
    }

    pub fn next_interpretation_id(&self) -> InterpretationId {
        next_id(self.document.interpretations.iter().map(|entry| entry.id))
    }

    /// Appends a symbol to the catalog.
    ///
    /// Name uniqueness is the catalog layer's contract; the store only
    /// holds what it is given.
    pub fn append_symbol(&mut self, symbol: Symbol) {
        self.document.symbols.push(symbol);
    }

    /// Appends a dream record to the journal.
    pub fn append_dream(&mut self, dream: Dream) {
        self.document.dreams.push(dream);
    }

    /// Appends an interpretation after verifying both references resolve.
    ///
    /// # Errors
    /// - `StoreError::UnknownDream` / `StoreError::UnknownSymbol` when the
    ///   referenced record does not exist; nothing is appended.
    pub fn append_interpretation(&mut self, interpretation: Interpretation) -> StoreResult<()> {
        if !self
            .document
            .dreams
            .iter()
            .any(|dream| dream.id == interpretation.dream_id)
        {
            return Err(StoreError::UnknownDream(interpretation.dream_id));
        }
        if !self
            .document
            .symbols
            .iter()
            .any(|symbol| symbol.id == interpretation.symbol_id)
        {
            return Err(StoreError::UnknownSymbol(interpretation.symbol_id));
        }
        self.document.interpretations.push(interpretation);
        Ok(())
    }
}

fn read_document(path: &Path) -> StoreResult<Option<DreamDocument>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&raw)?))
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max + 1)
}
