//! Applies a compiled predicate to a catalog.

use rayon::prelude::*;

use crate::query::CardPredicate;
use crate::types::Card;

/// Returns the cards accepted by `predicate`, in catalog order.
///
/// Catalogs with at least `parallel_threshold` cards are evaluated with rayon;
/// smaller ones sequentially. A threshold of zero always runs in parallel.
pub fn filter_catalog<'a>(
    cards: &'a [Card],
    predicate: &CardPredicate,
    parallel_threshold: usize,
) -> Vec<&'a Card> {
    let parallel = cards.len() >= parallel_threshold;
    let matches: Vec<&Card> = if parallel {
        cards.par_iter().filter(|card| predicate.test(card)).collect()
    } else {
        cards.iter().filter(|card| predicate.test(card)).collect()
    };

    log::debug!(
        "filtered catalog: {} of {} cards matched (parallel: {})",
        matches.len(),
        cards.len(),
        parallel
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::name_contains;
    use crate::types::{Face, Printing, Rarity};

    fn catalog(size: usize) -> Vec<Card> {
        (0..size)
            .map(|index| {
                let name = if index % 3 == 0 {
                    format!("Bolt {index}")
                } else {
                    format!("Bear {index}")
                };
                Card::single(
                    Face::new(name, "Instant", ""),
                    Printing {
                        set_code: "TST".to_string(),
                        rarity: Rarity::Common,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn parallel_and_sequential_agree_and_keep_order() {
        let cards = catalog(200);
        let predicate = name_contains("bolt");

        let sequential = filter_catalog(&cards, &predicate, usize::MAX);
        let parallel = filter_catalog(&cards, &predicate, 0);

        assert_eq!(sequential.len(), 67);
        assert_eq!(sequential, parallel);
        assert_eq!(sequential[1].full_name, "Bolt 3");
    }

    #[test]
    fn empty_catalog() {
        assert!(filter_catalog(&[], &CardPredicate::always(), 0).is_empty());
    }
}
