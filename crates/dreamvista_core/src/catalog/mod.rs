//! Symbol catalog operations.
//!
//! # Responsibility
//! - Seed and extend the set of known symbols.
//! - Enforce case-insensitive name uniqueness on add.
//!
//! # Invariants
//! - Symbols are never edited or removed once in the catalog.
//! - A rejected add leaves the catalog unchanged.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::symbol::{Symbol, SymbolId};
use crate::store::DreamStore;

pub mod defaults;

pub use defaults::default_symbols;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-layer error for symbol creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A symbol with the same name already exists, compared case-insensitively.
    DuplicateSymbol(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateSymbol(name) => write!(f, "symbol `{name}` already exists"),
        }
    }
}

impl Error for CatalogError {}

/// Field values for a user-added symbol.
///
/// Empty-name/meaning validation happens at the presentation boundary; the
/// catalog's only failure mode is a duplicate name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSymbol {
    pub symbol: String,
    pub meaning: String,
    pub emotional_tone: String,
    pub category: String,
    pub keywords: Vec<String>,
}

/// Adds a symbol to the catalog with the next monotonic id.
///
/// # Errors
/// - `CatalogError::DuplicateSymbol` when a symbol with the same name
///   exists case-insensitively; the catalog is left unchanged.
pub fn add_symbol(store: &mut DreamStore, request: &NewSymbol) -> CatalogResult<SymbolId> {
    if find_symbol(store, &request.symbol).is_some() {
        return Err(CatalogError::DuplicateSymbol(request.symbol.clone()));
    }

    let id = store.next_symbol_id();
    let keywords = request
        .keywords
        .iter()
        .map(|term| term.trim())
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect();

    store.append_symbol(Symbol {
        id,
        symbol: request.symbol.clone(),
        meaning: request.meaning.clone(),
        emotional_tone: request.emotional_tone.clone(),
        category: request.category.clone(),
        keywords,
    });

    Ok(id)
}

/// Looks up a symbol by name, case-insensitively.
pub fn find_symbol<'store>(store: &'store DreamStore, name: &str) -> Option<&'store Symbol> {
    store
        .symbols()
        .iter()
        .find(|symbol| symbol.name_matches(name))
}
