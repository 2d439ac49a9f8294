//! The search provider exposed to the hosting UI.

use crate::config::SearchConfig;
use crate::error::Result;
use crate::filter::{self, render_usage, SubfilterRegistry};
use crate::query::{compile_query, CardPredicate};
use crate::types::Card;

use super::engine::filter_catalog;

/// Turns query strings into card predicates using one subfilter registry.
#[derive(Debug, Clone)]
pub struct CardSearchProvider<'r> {
    name: String,
    registry: &'r SubfilterRegistry,
    parallel_threshold: usize,
}

impl<'r> CardSearchProvider<'r> {
    pub fn new(registry: &'r SubfilterRegistry) -> Self {
        Self::from_config(registry, &SearchConfig::default())
    }

    pub fn from_config(registry: &'r SubfilterRegistry, config: &SearchConfig) -> Self {
        Self {
            name: config.provider_name.clone(),
            registry,
            parallel_threshold: config.parallel_threshold,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Help text describing the query syntax and registered filters.
    pub fn usage(&self) -> String {
        render_usage(self.registry)
    }

    /// Compiles a raw query string into a predicate.
    ///
    /// Fails with a syntax error naming the offending term when a key is not
    /// registered or its filter rejects the operator or value.
    pub fn parse(&self, query: &str) -> Result<CardPredicate> {
        let predicate = compile_query(query, self.registry)?;
        log::debug!("compiled query {query:?}");
        Ok(predicate)
    }

    /// Parses `query` and returns the matching cards in catalog order.
    pub fn search<'c>(&self, query: &str, cards: &'c [Card]) -> Result<Vec<&'c Card>> {
        let predicate = self.parse(query)?;
        Ok(filter_catalog(cards, &predicate, self.parallel_threshold))
    }
}

impl CardSearchProvider<'static> {
    /// A provider over the process-wide registry.
    pub fn global(config: &SearchConfig) -> Result<Self> {
        Ok(Self::from_config(filter::global()?, config))
    }
}
