//! Lifting per-face tests into card predicates.

use crate::types::{Card, Face};

use super::predicate::CardPredicate;

/// A test over a single face, plus how results combine across a card's faces.
///
/// With `all_faces_must_match` set, a card passes only when every face does
/// (a card without faces passes vacuously). Otherwise one matching face is
/// enough (a card without faces never passes).
pub struct FaceFilter<F> {
    test: F,
    all_faces_must_match: bool,
}

impl<F> FaceFilter<F>
where
    F: Fn(&Face) -> bool + Send + Sync + 'static,
{
    pub fn new(test: F, all_faces_must_match: bool) -> Self {
        Self {
            test,
            all_faces_must_match,
        }
    }

    /// Passes when at least one face passes.
    pub fn any(test: F) -> Self {
        Self::new(test, false)
    }

    /// Passes when every face passes.
    pub fn all(test: F) -> Self {
        Self::new(test, true)
    }

    pub fn all_faces_must_match(&self) -> bool {
        self.all_faces_must_match
    }

    pub fn matches(&self, card: &Card) -> bool {
        faces_match(&card.faces, self.all_faces_must_match, &self.test)
    }

    pub fn into_predicate(self) -> CardPredicate {
        CardPredicate::new(move |card| self.matches(card))
    }
}

impl<F> From<FaceFilter<F>> for CardPredicate
where
    F: Fn(&Face) -> bool + Send + Sync + 'static,
{
    fn from(filter: FaceFilter<F>) -> Self {
        filter.into_predicate()
    }
}

fn faces_match(faces: &[Face], all: bool, test: impl Fn(&Face) -> bool) -> bool {
    if all {
        faces.iter().all(test)
    } else {
        faces.iter().any(test)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Printing, Rarity};

    fn card_with_faces(faces: Vec<Face>) -> Card {
        Card::new(
            "Test Card",
            faces,
            Printing {
                set_code: "TST".to_string(),
                rarity: Rarity::Rare,
            },
        )
    }

    fn is_creature(face: &Face) -> bool {
        face.type_line.contains("Creature")
    }

    #[test]
    fn zero_faces_all_is_vacuously_true() {
        let card = card_with_faces(Vec::new());
        assert!(FaceFilter::all(is_creature).into_predicate().test(&card));
    }

    #[test]
    fn zero_faces_any_is_false() {
        let card = card_with_faces(Vec::new());
        assert!(!FaceFilter::any(is_creature).into_predicate().test(&card));
    }

    #[test]
    fn mixed_faces() {
        let card = card_with_faces(vec![
            Face::new("Front", "Creature - Human", ""),
            Face::new("Back", "Enchantment", ""),
        ]);
        assert!(FaceFilter::any(is_creature).matches(&card));
        assert!(!FaceFilter::all(is_creature).matches(&card));
    }

    #[test]
    fn uniform_faces() {
        let card = card_with_faces(vec![
            Face::new("Front", "Creature - Human", ""),
            Face::new("Back", "Creature - Werewolf", ""),
        ]);
        let predicate: CardPredicate = FaceFilter::all(is_creature).into();
        assert!(predicate.test(&card));
        assert!(FaceFilter::any(is_creature).matches(&card));
    }
}
