//! Caller-facing search over a card catalog.
//!
//! This module provides:
//! - The `CardSearchProvider` API used by the hosting UI
//! - Catalog filtering with a compiled predicate

mod engine;
mod provider;

// Re-export main types
pub use engine::filter_catalog;
pub use provider::CardSearchProvider;
