use crate::error::Result;
use crate::filter::{unsupported, Subfilter};
use crate::query::{CardPredicate, FaceFilter, Operator, TextNeedle};
use crate::types::Face;

/// `type` / `t`: face type lines, ignoring case.
///
/// - `:` some face's type line contains the value
/// - `=` some face's type line equals the value
/// - `!=` no face's type line equals the value
pub struct TypeLineFilter;

impl Subfilter for TypeLineFilter {
    fn key(&self) -> &str {
        "type"
    }

    fn shorthand(&self) -> Option<&str> {
        Some("t")
    }

    fn description(&self) -> &str {
        "Type line of any face contains (:) or equals (=) the value; != requires every face to differ"
    }

    fn compile(&self, operator: Operator, value: &str) -> Result<CardPredicate> {
        let needle = TextNeedle::new(value);
        match operator {
            Operator::Direct => {
                Ok(FaceFilter::any(move |face: &Face| needle.found_in(&face.type_line)).into())
            }
            Operator::Equals => {
                Ok(FaceFilter::any(move |face: &Face| needle.equals(&face.type_line)).into())
            }
            Operator::NotEquals => {
                Ok(FaceFilter::all(move |face: &Face| !needle.equals(&face.type_line)).into())
            }
            other => Err(unsupported(self, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Card, Printing, Rarity};

    fn transform() -> Card {
        Card::new(
            "Delver of Secrets // Insectile Aberration",
            vec![
                Face::new("Delver of Secrets", "Creature - Human Wizard", ""),
                Face::new("Insectile Aberration", "Creature - Human Insect", ""),
            ],
            Printing {
                set_code: "ISD".to_string(),
                rarity: Rarity::Common,
            },
        )
    }

    #[test]
    fn direct_matches_any_face() {
        let card = transform();
        assert!(TypeLineFilter.compile(Operator::Direct, "insect").expect("compile").test(&card));
        assert!(!TypeLineFilter.compile(Operator::Direct, "land").expect("compile").test(&card));
    }

    #[test]
    fn equals_needs_a_whole_type_line() {
        let card = transform();
        assert!(TypeLineFilter
            .compile(Operator::Equals, "creature - human wizard")
            .expect("compile")
            .test(&card));
        assert!(!TypeLineFilter.compile(Operator::Equals, "creature").expect("compile").test(&card));
    }

    #[test]
    fn not_equals_requires_every_face_to_differ() {
        let card = transform();
        assert!(!TypeLineFilter
            .compile(Operator::NotEquals, "Creature - Human Wizard")
            .expect("compile")
            .test(&card));
        assert!(TypeLineFilter.compile(Operator::NotEquals, "Land").expect("compile").test(&card));
    }

    #[test]
    fn rejects_ordering_operators() {
        let error = TypeLineFilter
            .compile(Operator::GreaterThan, "creature")
            .expect_err("unsupported");
        assert!(matches!(
            error,
            crate::QueryError::UnsupportedOperator { key, operator: Operator::GreaterThan } if key == "type"
        ));
    }
}
