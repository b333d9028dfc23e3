//! Catalog-order substring matcher.
//!
//! # Responsibility
//! - Scan every catalog symbol against lower-cased dream text.
//! - Produce at most one match per symbol with a fixed relevance weight.
//!
//! # Invariants
//! - Symbols are evaluated in catalog order; results keep that order.
//! - A name match short-circuits the symbol's keyword scan.

use crate::model::symbol::Symbol;

/// Relevance assigned when the symbol name itself occurs in the text.
pub const NAME_MATCH_RELEVANCE: u8 = 10;

/// Relevance assigned when only one of the symbol's keywords occurs.
pub const KEYWORD_MATCH_RELEVANCE: u8 = 7;

/// Single analyzer hit: the matched symbol and its match strength.
///
/// Carries a full symbol snapshot so callers can render meaning, category
/// and tone without a second catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMatch {
    pub symbol: Symbol,
    pub relevance: u8,
}

/// Scans `symbols` in order against `text` and returns the ordered matches.
///
/// An empty result means no recognized symbols; it is not an error.
pub fn match_symbols(symbols: &[Symbol], text: &str) -> Vec<SymbolMatch> {
    let haystack = text.to_lowercase();
    let mut matches = Vec::new();

    for symbol in symbols {
        if haystack.contains(&symbol.symbol.to_lowercase()) {
            matches.push(SymbolMatch {
                symbol: symbol.clone(),
                relevance: NAME_MATCH_RELEVANCE,
            });
            continue;
        }

        for keyword in &symbol.keywords {
            let needle = keyword.trim().to_lowercase();
            if !needle.is_empty() && haystack.contains(&needle) {
                matches.push(SymbolMatch {
                    symbol: symbol.clone(),
                    relevance: KEYWORD_MATCH_RELEVANCE,
                });
                break;
            }
        }
    }

    matches
}
