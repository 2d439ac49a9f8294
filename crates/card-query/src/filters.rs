//! Built-in subfilters for the card catalog.
//!
//! Each filter documents what the shared operators mean for its field.

mod face_count;
mod name;
mod oracle;
mod rarity;
mod type_line;

use std::sync::Arc;

use crate::config::SearchConfig;
use crate::filter::Subfilter;

pub use face_count::FaceCountFilter;
pub use name::NameFilter;
pub use oracle::OracleFilter;
pub use rarity::RarityFilter;
pub use type_line::TypeLineFilter;

/// The default filter set, in registration order.
pub fn builtin_subfilters() -> Vec<Arc<dyn Subfilter>> {
    let filters: [Arc<dyn Subfilter>; 5] = [
        Arc::new(NameFilter),
        Arc::new(TypeLineFilter),
        Arc::new(OracleFilter),
        Arc::new(RarityFilter),
        Arc::new(FaceCountFilter),
    ];
    filters.into()
}

/// The default filter set minus the keys disabled in `config`.
pub fn builtin_subfilters_for(config: &SearchConfig) -> Vec<Arc<dyn Subfilter>> {
    builtin_subfilters()
        .into_iter()
        .filter(|subfilter| {
            let disabled = config.is_filter_disabled(subfilter.key());
            if disabled {
                log::debug!("built-in filter '{}' disabled by config", subfilter.key());
            }
            !disabled
        })
        .collect()
}
