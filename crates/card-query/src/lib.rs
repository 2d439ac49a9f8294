//! Card catalog search query library.
//!
//! This crate compiles user-typed search strings into card predicates:
//! - Query tokenizing and the shared operator vocabulary
//! - A registry of pluggable field filters keyed by name and shorthand
//! - Predicate compilation with negation and implicit AND across terms
//! - Built-in filters for names, types, rules text, rarity and face count

pub mod config;
pub mod error;
pub mod filter;
pub mod filters;
pub mod query;
pub mod search;
pub mod types;

// Re-export main types
pub use config::{load_or_create_search_config, SearchConfig};
pub use error::{QueryError, Result};
pub use filter::{render_usage, Subfilter, SubfilterRegistry};
pub use filters::{builtin_subfilters, builtin_subfilters_for};
pub use query::{
    compile, compile_query, parse_operator, tokenize, CardPredicate, FaceFilter, Operator,
    SourceTerm, Term,
};
pub use search::{filter_catalog, CardSearchProvider};
pub use types::{Card, Face, Printing, Rarity};
