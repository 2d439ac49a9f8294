use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{QueryError, Result};

use super::Subfilter;

static GLOBAL_REGISTRY: OnceLock<SubfilterRegistry> = OnceLock::new();

/// Lookup table from key or shorthand to the subfilter that owns it.
///
/// Keys and shorthands share one namespace. A shorthand slot is claimed by the
/// first filter that asks for it; a key slot always goes to the last filter
/// registered under that key.
#[derive(Default)]
pub struct SubfilterRegistry {
    lookup: HashMap<String, Arc<dyn Subfilter>>,
}

impl SubfilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_providers<I>(providers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Subfilter>>,
    {
        let mut registry = Self::new();
        registry.register_all(providers);
        registry
    }

    pub fn register_all<I>(&mut self, providers: I)
    where
        I: IntoIterator<Item = Arc<dyn Subfilter>>,
    {
        for provider in providers {
            self.register(provider);
        }
    }

    fn register(&mut self, provider: Arc<dyn Subfilter>) {
        if provider.key().is_empty() {
            log::warn!(
                "skipping filter with empty key ({})",
                provider.description()
            );
            return;
        }

        if let Some(shorthand) = provider.shorthand().filter(|value| !value.is_empty()) {
            match self.lookup.entry(shorthand.to_string()) {
                Entry::Occupied(existing) => log::debug!(
                    "shorthand '{}' of filter '{}' already taken by '{}'",
                    shorthand,
                    provider.key(),
                    existing.get().key()
                ),
                Entry::Vacant(slot) => {
                    slot.insert(Arc::clone(&provider));
                }
            }
        }

        let key = provider.key().to_string();
        if let Some(previous) = self.lookup.insert(key.clone(), provider) {
            log::warn!(
                "filter key '{}' replaces earlier registration of '{}'",
                key,
                previous.key()
            );
        }
    }

    /// Looks up a subfilter by key or shorthand.
    pub fn find(&self, lookup: &str) -> Option<Arc<dyn Subfilter>> {
        self.lookup.get(lookup).cloned()
    }

    pub fn contains(&self, lookup: &str) -> bool {
        self.lookup.contains_key(lookup)
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Every distinct subfilter instance, sorted by key then shorthand.
    pub fn subfilters(&self) -> Vec<Arc<dyn Subfilter>> {
        let mut distinct: Vec<Arc<dyn Subfilter>> = Vec::new();
        for subfilter in self.lookup.values() {
            if !distinct.iter().any(|seen| Arc::ptr_eq(seen, subfilter)) {
                distinct.push(Arc::clone(subfilter));
            }
        }
        distinct.sort_by(|left, right| {
            left.key()
                .cmp(right.key())
                .then_with(|| left.shorthand().cmp(&right.shorthand()))
                .then_with(|| left.description().cmp(right.description()))
        });
        distinct
    }
}

impl std::fmt::Debug for SubfilterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut lookups = self.lookup.keys().collect::<Vec<_>>();
        lookups.sort();
        f.debug_struct("SubfilterRegistry")
            .field("lookups", &lookups)
            .finish()
    }
}

/// Builds the process-wide registry. Must run before the first query is compiled.
///
/// Only the first call registers anything; later calls return the existing
/// registry unchanged.
pub fn initialize<I>(providers: I) -> &'static SubfilterRegistry
where
    I: IntoIterator<Item = Arc<dyn Subfilter>>,
{
    let mut providers = Some(providers);
    let registry = GLOBAL_REGISTRY.get_or_init(|| {
        let registry = SubfilterRegistry::from_providers(providers.take().into_iter().flatten());
        log::debug!("initialized subfilter registry: {registry:?}");
        registry
    });
    if providers.is_some() {
        log::warn!("subfilter registry already initialized; ignoring new providers");
    }
    registry
}

/// Returns the process-wide registry built by [`initialize`].
pub fn global() -> Result<&'static SubfilterRegistry> {
    GLOBAL_REGISTRY
        .get()
        .ok_or(QueryError::RegistryNotInitialized)
}
