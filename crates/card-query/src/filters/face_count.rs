use crate::error::{QueryError, Result};
use crate::filter::Subfilter;
use crate::query::{CardPredicate, Operator};

/// `faces`: number of faces, compared numerically. `:` means equality.
pub struct FaceCountFilter;

impl Subfilter for FaceCountFilter {
    fn key(&self) -> &str {
        "faces"
    }

    fn description(&self) -> &str {
        "Number of faces, compared numerically"
    }

    fn compile(&self, operator: Operator, value: &str) -> Result<CardPredicate> {
        let count: usize = value.trim().parse().map_err(|_| QueryError::InvalidValue {
            key: self.key().to_string(),
            value: value.to_string(),
            reason: "expected a whole number".to_string(),
        })?;
        Ok(CardPredicate::new(move |card| {
            operator.compare(&card.faces.len(), &count)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Card, Face, Printing, Rarity};

    fn with_faces(count: usize) -> Card {
        Card::new(
            "Sample",
            (0..count)
                .map(|index| Face::new(format!("Face {index}"), "Instant", ""))
                .collect(),
            Printing {
                set_code: "TST".to_string(),
                rarity: Rarity::Common,
            },
        )
    }

    #[test]
    fn compares_face_count() {
        let multi = FaceCountFilter
            .compile(Operator::GreaterThan, "1")
            .expect("compile");
        assert!(!multi.test(&with_faces(1)));
        assert!(multi.test(&with_faces(2)));

        let single = FaceCountFilter.compile(Operator::Direct, "1").expect("compile");
        assert!(single.test(&with_faces(1)));
        assert!(!single.test(&with_faces(0)));

        let at_most = FaceCountFilter
            .compile(Operator::LessOrEquals, "2")
            .expect("compile");
        assert!(at_most.test(&with_faces(0)));
        assert!(!at_most.test(&with_faces(3)));
    }

    #[test]
    fn non_numeric_value_is_invalid() {
        for value in ["two", "-1", "1.5", ""] {
            assert!(matches!(
                FaceCountFilter.compile(Operator::Equals, value),
                Err(QueryError::InvalidValue { .. })
            ));
        }
    }
}
