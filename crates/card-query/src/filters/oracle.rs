use crate::error::Result;
use crate::filter::{unsupported, Subfilter};
use crate::query::{CardPredicate, FaceFilter, Operator, TextNeedle};
use crate::types::Face;

/// `oracle` / `o`: rules text. Only `:` (some face's text contains the value).
pub struct OracleFilter;

impl Subfilter for OracleFilter {
    fn key(&self) -> &str {
        "oracle"
    }

    fn shorthand(&self) -> Option<&str> {
        Some("o")
    }

    fn description(&self) -> &str {
        "Rules text of any face contains the value"
    }

    fn compile(&self, operator: Operator, value: &str) -> Result<CardPredicate> {
        match operator {
            Operator::Direct => {
                let needle = TextNeedle::new(value);
                Ok(FaceFilter::any(move |face: &Face| needle.found_in(&face.rules_text)).into())
            }
            other => Err(unsupported(self, other)),
        }
    }
}
