//! The plugin surface for field filters.
//!
//! A [`Subfilter`] owns one query key (plus an optional shorthand) and turns
//! an operator and value into a [`CardPredicate`]. Filters are collected into
//! a [`SubfilterRegistry`] once at startup.

mod registry;
mod usage;

pub use registry::{global, initialize, SubfilterRegistry};
pub use usage::render_usage;

use crate::error::{QueryError, Result};
use crate::query::{CardPredicate, Operator};

pub trait Subfilter: Send + Sync {
    /// Stable, non-empty key matched case-sensitively against query terms.
    fn key(&self) -> &str;

    /// Short alias for the key. Several filters may claim the same one.
    fn shorthand(&self) -> Option<&str> {
        None
    }

    fn description(&self) -> &str;

    /// Builds the predicate for `key<operator>value`.
    ///
    /// Implementations match on `operator` and return
    /// [`QueryError::UnsupportedOperator`] for operators they do not define.
    fn compile(&self, operator: Operator, value: &str) -> Result<CardPredicate>;
}

/// The error a subfilter returns for an operator it does not support.
pub fn unsupported(filter: &(impl Subfilter + ?Sized), operator: Operator) -> QueryError {
    QueryError::UnsupportedOperator {
        key: filter.key().to_string(),
        operator,
    }
}
