//! Use-case services over the dream store.
//!
//! # Responsibility
//! - Provide the stable entry points the presentation layer calls.
//! - Keep persistence side effects out of the pure matching core.

pub mod dream_service;
