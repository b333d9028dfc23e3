//! Dream-text analysis.
//!
//! # Responsibility
//! - Match free-text dream descriptions against the symbol catalog.
//!
//! # Invariants
//! - Matching is pure; persistence of results lives in the service layer.

mod matcher;

pub use matcher::{match_symbols, SymbolMatch, KEYWORD_MATCH_RELEVANCE, NAME_MATCH_RELEVANCE};
