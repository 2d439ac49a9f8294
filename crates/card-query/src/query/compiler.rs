//! Compiles parsed terms into a single card predicate.

use crate::error::{QueryError, Result};
use crate::filter::SubfilterRegistry;
use crate::types::Card;

use super::expression::Term;
use super::parser::tokenize_spanned;
use super::predicate::CardPredicate;
use super::text_match::TextNeedle;

/// Tokenizes and compiles a raw query string.
///
/// A failing term is reported exactly as it appears in `input`.
pub fn compile_query(input: &str, registry: &SubfilterRegistry) -> Result<CardPredicate> {
    let terms = tokenize_spanned(input);
    conjoin(
        terms.iter().map(|scanned| (&scanned.term, scanned.source(input))),
        registry,
    )
}

/// Folds `terms` into one conjunction, resolving keyed terms through `registry`.
///
/// An empty term list accepts every card. The first term that fails aborts
/// compilation with a [`QueryError::Syntax`] naming that term, rendered back
/// into query syntax.
pub fn compile(terms: &[Term], registry: &SubfilterRegistry) -> Result<CardPredicate> {
    terms.iter().try_fold(CardPredicate::always(), |compiled, term| {
        let predicate =
            compile_term(term, registry).map_err(|error| error.in_term(term.to_string()))?;
        Ok(compiled.and(predicate))
    })
}

fn conjoin<'t, I>(terms: I, registry: &SubfilterRegistry) -> Result<CardPredicate>
where
    I: IntoIterator<Item = (&'t Term, &'t str)>,
{
    terms
        .into_iter()
        .try_fold(CardPredicate::always(), |compiled, (term, source)| {
            let predicate =
                compile_term(term, registry).map_err(|error| error.in_term(source))?;
            Ok(compiled.and(predicate))
        })
}

/// Compiles one term, applying its negation marker.
pub fn compile_term(term: &Term, registry: &SubfilterRegistry) -> Result<CardPredicate> {
    let predicate = match term.filter_parts() {
        None => name_contains(&term.value),
        Some((key, operator)) => {
            let subfilter = registry
                .find(key)
                .ok_or_else(|| QueryError::UnrecognizedFilterKey(key.to_string()))?;
            subfilter.compile(operator, &term.value)?
        }
    };

    Ok(if term.negate {
        predicate.negate()
    } else {
        predicate
    })
}

/// The keyless term: full name or any face name contains `value`, ignoring case.
pub fn name_contains(value: &str) -> CardPredicate {
    let needle = TextNeedle::new(value);
    CardPredicate::new(move |card| card_name_contains(card, &needle))
}

fn card_name_contains(card: &Card, needle: &TextNeedle) -> bool {
    needle.found_in(&card.full_name) || card.faces.iter().any(|face| needle.found_in(&face.name))
}
