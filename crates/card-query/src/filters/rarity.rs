use crate::error::{QueryError, Result};
use crate::filter::Subfilter;
use crate::query::{CardPredicate, Operator};
use crate::types::Rarity;

/// `rarity` / `r`: printing rarity, ordered common < uncommon < rare < mythic < special.
///
/// All operators compare against that order; `:` means equality. Values are
/// rarity names or their first letter.
pub struct RarityFilter;

impl Subfilter for RarityFilter {
    fn key(&self) -> &str {
        "rarity"
    }

    fn shorthand(&self) -> Option<&str> {
        Some("r")
    }

    fn description(&self) -> &str {
        "Printing rarity (common, uncommon, rare, mythic, special), compared in that order"
    }

    fn compile(&self, operator: Operator, value: &str) -> Result<CardPredicate> {
        let rarity = Rarity::parse(value).ok_or_else(|| QueryError::InvalidValue {
            key: self.key().to_string(),
            value: value.to_string(),
            reason: "expected one of common, uncommon, rare, mythic, special".to_string(),
        })?;
        Ok(CardPredicate::new(move |card| {
            operator.compare(&card.rarity(), &rarity)
        }))
    }
}
