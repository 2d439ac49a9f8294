//! Comparison operators shared by every subfilter.

use std::str::FromStr;

use crate::error::{QueryError, Result};

/// A comparison operator as written between a filter key and its value.
///
/// Operators carry no comparison logic; each subfilter decides what they
/// mean for its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Direct,
    Equals,
    NotEquals,
    LessThan,
    LessOrEquals,
    GreaterThan,
    GreaterOrEquals,
}

impl Operator {
    /// Every operator, in the order they are listed in usage text.
    pub const ALL: [Operator; 7] = [
        Self::Direct,
        Self::Equals,
        Self::NotEquals,
        Self::LessThan,
        Self::LessOrEquals,
        Self::GreaterThan,
        Self::GreaterOrEquals,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Direct => ":",
            Self::Equals => "=",
            Self::NotEquals => "!=",
            Self::LessThan => "<",
            Self::LessOrEquals => "<=",
            Self::GreaterThan => ">",
            Self::GreaterOrEquals => ">=",
        }
    }

    /// Evaluates an ordered comparison with this operator, treating `:` as equality.
    pub fn compare<T: Ord>(self, left: &T, right: &T) -> bool {
        match self {
            Self::Direct | Self::Equals => left == right,
            Self::NotEquals => left != right,
            Self::LessThan => left < right,
            Self::LessOrEquals => left <= right,
            Self::GreaterThan => left > right,
            Self::GreaterOrEquals => left >= right,
        }
    }
}

/// Parses an operator from its exact symbol.
pub fn parse_operator(symbol: &str) -> Result<Operator> {
    match symbol {
        ":" => Ok(Operator::Direct),
        "=" => Ok(Operator::Equals),
        "!=" => Ok(Operator::NotEquals),
        "<" => Ok(Operator::LessThan),
        "<=" => Ok(Operator::LessOrEquals),
        ">" => Ok(Operator::GreaterThan),
        ">=" => Ok(Operator::GreaterOrEquals),
        other => Err(QueryError::UnknownOperator(other.to_string())),
    }
}

/// Matches the longest operator symbol at the start of `input`.
///
/// Returns the operator and the number of bytes it occupies.
pub(crate) fn match_operator_prefix(input: &str) -> Option<(Operator, usize)> {
    for symbol in ["<=", ">=", "!=", ":", "=", "<", ">"] {
        if input.starts_with(symbol) {
            return parse_operator(symbol)
                .ok()
                .map(|operator| (operator, symbol.len()));
        }
    }
    None
}

impl FromStr for Operator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        parse_operator(s)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
