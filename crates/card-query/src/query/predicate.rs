//! Compiled card predicates.

use std::sync::Arc;

use crate::types::Card;

type PredicateFn = dyn Fn(&Card) -> bool + Send + Sync;

/// A pure boolean test over a card.
///
/// Predicates hold no mutable state, so a single compiled predicate can be
/// shared across threads and evaluated against any number of cards.
#[derive(Clone)]
pub struct CardPredicate {
    test: Arc<PredicateFn>,
}

impl CardPredicate {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&Card) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Arc::new(test),
        }
    }

    /// The predicate that accepts every card.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// The predicate that rejects every card.
    pub fn never() -> Self {
        Self::new(|_| false)
    }

    pub fn test(&self, card: &Card) -> bool {
        (self.test)(card)
    }

    /// Short-circuiting conjunction; `self` is evaluated first.
    pub fn and(self, other: CardPredicate) -> Self {
        Self::new(move |card| self.test(card) && other.test(card))
    }

    pub fn negate(self) -> Self {
        Self::new(move |card| !self.test(card))
    }
}

impl std::fmt::Debug for CardPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardPredicate").finish_non_exhaustive()
    }
}
