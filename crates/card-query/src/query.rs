//! Query parsing and compilation for card search.
//!
//! This module provides the query language for the card catalog:
//! - Operators shared by every filter
//! - Tokenizing a raw query into terms
//! - Lifting per-face tests into card predicates
//! - Compiling terms into one predicate (negation, conjunction, default name search)

mod compiler;
mod expression;
mod faces;
mod operator;
mod parser;
mod predicate;
mod text_match;

pub use compiler::{compile, compile_query, compile_term, name_contains};
pub use expression::Term;
pub use faces::FaceFilter;
pub use operator::{parse_operator, Operator};
pub use parser::{tokenize, tokenize_spanned, SourceTerm};
pub use predicate::CardPredicate;
pub use text_match::TextNeedle;
