//! Core domain logic for DreamVista.
//! This crate is the single source of truth for journal invariants.

pub mod analyze;
pub mod catalog;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use analyze::{match_symbols, SymbolMatch, KEYWORD_MATCH_RELEVANCE, NAME_MATCH_RELEVANCE};
pub use catalog::{
    add_symbol, default_symbols, find_symbol, CatalogError, CatalogResult, NewSymbol,
};
pub use logging::{default_log_level, init_logging};
pub use model::dream::{Dream, DreamId};
pub use model::interpretation::{Interpretation, InterpretationId};
pub use model::symbol::{split_keywords, Symbol, SymbolId};
pub use query::{
    search_by_symbol, statistics, DreamStatistics, SymbolFrequency, SymbolSearchHit, ToneCount,
};
pub use service::dream_service::{AnalyzeOptions, DreamService};
pub use store::{DreamDocument, DreamStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
