//! Backing-document persistence for the dream journal.
//!
//! # Responsibility
//! - Own the single JSON document holding symbols, dreams, interpretations.
//! - Load it wholesale at startup and rewrite it wholesale on every flush.
//!
//! # Invariants
//! - No partial-collection save exists; every flush writes the full dataset.
//! - A missing or unreadable document falls back to the default catalog.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::dream::DreamId;
use crate::model::symbol::SymbolId;

mod document;

pub use document::{DreamDocument, DreamStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence-layer error for document I/O and reference checks.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serde(serde_json::Error),
    /// An interpretation referenced a dream id not present in the store.
    UnknownDream(DreamId),
    /// An interpretation referenced a symbol id not present in the store.
    UnknownSymbol(SymbolId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "{err}"),
            Self::UnknownDream(id) => write!(f, "unknown dream id: {id}"),
            Self::UnknownSymbol(id) => write!(f, "unknown symbol id: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::UnknownDream(_) => None,
            Self::UnknownSymbol(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}
