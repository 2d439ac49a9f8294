//! Query tokenizer.
//!
//! Grammar of one term, scanned left to right:
//!
//! ```text
//! term     := negation? (key operator)? value
//! negation := '-' | '!'
//! key      := letter+
//! operator := ':' | '=' | '!=' | '<' | '<=' | '>' | '>='
//! value    := '"' [^"]* '"'? | non-whitespace+
//! ```
//!
//! There is no validation pass. Whatever the grammar matches becomes a term:
//! an unterminated quote runs to the end of the input, and a negation marker
//! or `key<op>` with nothing after it is read back as part of a bare value.

use std::ops::Range;

use super::expression::Term;
use super::operator::{match_operator_prefix, Operator};

/// A term together with the byte range of `input` it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTerm {
    pub term: Term,
    pub span: Range<usize>,
}

impl SourceTerm {
    /// The term exactly as written in `input`.
    pub fn source<'a>(&self, input: &'a str) -> &'a str {
        &input[self.span.clone()]
    }
}

/// Splits a raw query string into its ordered terms.
pub fn tokenize(input: &str) -> Vec<Term> {
    tokenize_spanned(input)
        .into_iter()
        .map(|scanned| scanned.term)
        .collect()
}

/// Like [`tokenize`], keeping the source range of every term.
pub fn tokenize_spanned(input: &str) -> Vec<SourceTerm> {
    let mut terms = Vec::new();
    let mut cursor = 0usize;

    while let Some(ch) = input[cursor..].chars().next() {
        if ch.is_whitespace() {
            cursor += ch.len_utf8();
            continue;
        }

        let (term, next_cursor) = scan_term(input, cursor);
        terms.push(SourceTerm {
            term,
            span: cursor..next_cursor,
        });
        cursor = next_cursor;
    }

    terms
}

/// Scans one term starting at a non-whitespace byte offset.
fn scan_term(input: &str, start: usize) -> (Term, usize) {
    let mut cursor = start;
    let mut negate = false;

    if let Some(ch @ ('-' | '!')) = input[cursor..].chars().next() {
        if starts_value(&input[cursor + ch.len_utf8()..]) {
            negate = true;
            cursor += ch.len_utf8();
        }
    }

    let filter = match scan_key_operator(&input[cursor..]) {
        Some((key, operator, consumed)) if starts_value(&input[cursor + consumed..]) => {
            cursor += consumed;
            Some((key.to_string(), operator))
        }
        _ => None,
    };

    let (value, end) = scan_value(input, cursor);
    let term = Term {
        negate,
        filter,
        value,
    };
    (term, end)
}

/// Matches `letter+ operator` at the start of `rest`.
fn scan_key_operator(rest: &str) -> Option<(&str, Operator, usize)> {
    let key_len = rest
        .char_indices()
        .find(|(_, ch)| !ch.is_alphabetic())
        .map(|(index, _)| index)
        .unwrap_or(rest.len());
    if key_len == 0 {
        return None;
    }

    let (operator, operator_len) = match_operator_prefix(&rest[key_len..])?;
    Some((&rest[..key_len], operator, key_len + operator_len))
}

fn starts_value(rest: &str) -> bool {
    rest.chars().next().is_some_and(|ch| !ch.is_whitespace())
}

/// Reads a quoted span or a run of non-whitespace starting at `start`.
fn scan_value(input: &str, start: usize) -> (String, usize) {
    let rest = &input[start..];

    if let Some(quoted) = rest.strip_prefix('"') {
        return match quoted.find('"') {
            Some(close) => (quoted[..close].to_string(), start + close + 2),
            None => (quoted.to_string(), input.len()),
        };
    }

    let len = rest
        .char_indices()
        .find(|(_, ch)| ch.is_whitespace())
        .map(|(index, _)| index)
        .unwrap_or(rest.len());
    (rest[..len].to_string(), start + len)
}
