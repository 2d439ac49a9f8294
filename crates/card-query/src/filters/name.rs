use crate::error::Result;
use crate::filter::{unsupported, Subfilter};
use crate::query::{name_contains, CardPredicate, Operator, TextNeedle};
use crate::types::Card;

/// `name` / `n`: card and face names, ignoring case.
///
/// - `:` the full name or any face name contains the value
/// - `=` the full name or any face name equals the value
/// - `!=` neither the full name nor any face name equals the value
pub struct NameFilter;

impl Subfilter for NameFilter {
    fn key(&self) -> &str {
        "name"
    }

    fn shorthand(&self) -> Option<&str> {
        Some("n")
    }

    fn description(&self) -> &str {
        "Card name contains (:), equals (=) or differs from (!=) the value"
    }

    fn compile(&self, operator: Operator, value: &str) -> Result<CardPredicate> {
        match operator {
            Operator::Direct => Ok(name_contains(value)),
            Operator::Equals => Ok(name_equals(value)),
            Operator::NotEquals => Ok(name_equals(value).negate()),
            other => Err(unsupported(self, other)),
        }
    }
}

fn name_equals(value: &str) -> CardPredicate {
    let needle = TextNeedle::new(value);
    CardPredicate::new(move |card: &Card| {
        needle.equals(&card.full_name) || card.faces.iter().any(|face| needle.equals(&face.name))
    })
}
