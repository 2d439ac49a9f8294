//! Parsed query terms.

use super::operator::Operator;

/// One parsed unit of a query string.
///
/// A term with no `filter` is a bare name search; otherwise it carries the
/// key and operator together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub negate: bool,
    pub filter: Option<(String, Operator)>,
    pub value: String,
}

impl Term {
    /// A bare value searched against card names.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            negate: false,
            filter: None,
            value: value.into(),
        }
    }

    /// A `key<op>value` filter term.
    pub fn filter(key: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        Self {
            negate: false,
            filter: Some((key.into(), operator)),
            value: value.into(),
        }
    }

    pub fn negated(mut self) -> Self {
        self.negate = !self.negate;
        self
    }

    pub fn key(&self) -> Option<&str> {
        self.filter.as_ref().map(|(key, _)| key.as_str())
    }

    pub fn operator(&self) -> Option<Operator> {
        self.filter.as_ref().map(|(_, operator)| *operator)
    }

    /// Returns the key and operator when this is a filter term.
    pub fn filter_parts(&self) -> Option<(&str, Operator)> {
        self.filter
            .as_ref()
            .map(|(key, operator)| (key.as_str(), *operator))
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negate {
            f.write_str("-")?;
        }
        if let Some((key, operator)) = self.filter_parts() {
            write!(f, "{key}{operator}")?;
        }
        if self.value.is_empty() || self.value.chars().any(char::is_whitespace) {
            write!(f, "\"{}\"", self.value)
        } else {
            f.write_str(&self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_query_syntax() {
        assert_eq!(Term::text("bolt").to_string(), "bolt");
        assert_eq!(
            Term::filter("t", Operator::Direct, "creature")
                .negated()
                .to_string(),
            "-t:creature"
        );
        assert_eq!(
            Term::filter("faces", Operator::GreaterOrEquals, "2").to_string(),
            "faces>=2"
        );
        assert_eq!(Term::text("two words").to_string(), "\"two words\"");
        assert_eq!(Term::text("").to_string(), "\"\"");
    }

    #[test]
    fn key_and_operator_come_together() {
        let bare = Term::text("bolt");
        assert_eq!(bare.key(), None);
        assert_eq!(bare.operator(), None);

        let keyed = Term::filter("r", Operator::GreaterThan, "rare");
        assert_eq!(keyed.key(), Some("r"));
        assert_eq!(keyed.operator(), Some(Operator::GreaterThan));
        assert_eq!(keyed.filter_parts(), Some(("r", Operator::GreaterThan)));
    }

    #[test]
    fn negated_toggles() {
        let term = Term::text("x").negated().negated();
        assert!(!term.negate);
    }
}
