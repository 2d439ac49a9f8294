use std::path::PathBuf;

use crate::query::Operator;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("unknown operator: {0:?}")]
    UnknownOperator(String),

    #[error("unrecognized filter key: {0}")]
    UnrecognizedFilterKey(String),

    #[error("filter '{key}' does not support the '{operator}' operator")]
    UnsupportedOperator { key: String, operator: Operator },

    #[error("filter '{key}' cannot interpret {value:?}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// A term failed to compile. `term` is the offending text as written in the
    /// query, or the term rendered back into query syntax when compiled from
    /// already tokenized terms.
    #[error("syntax error in `{term}`: {source}")]
    Syntax {
        term: String,
        #[source]
        source: Box<QueryError>,
    },

    #[error("subfilter registry has not been initialized")]
    RegistryNotInitialized,

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl QueryError {
    /// Wraps an error in a syntax error pointing at the given term text.
    pub fn in_term(self, term: impl Into<String>) -> Self {
        match self {
            Self::Syntax { .. } => self,
            other => Self::Syntax {
                term: term.into(),
                source: Box::new(other),
            },
        }
    }

    /// Returns the underlying error kind, looking through `Syntax` wrappers.
    pub fn cause(&self) -> &QueryError {
        match self {
            Self::Syntax { source, .. } => source.cause(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_term_wraps_once() {
        let error = QueryError::UnrecognizedFilterKey("zz".to_string())
            .in_term("zz:foo")
            .in_term("outer");
        match &error {
            QueryError::Syntax { term, .. } => assert_eq!(term, "zz:foo"),
            other => panic!("expected syntax error, got {other:?}"),
        }
        assert!(matches!(
            error.cause(),
            QueryError::UnrecognizedFilterKey(key) if key == "zz"
        ));
    }

    #[test]
    fn syntax_message_names_term() {
        let error = QueryError::UnsupportedOperator {
            key: "oracle".to_string(),
            operator: Operator::LessThan,
        }
        .in_term("o<draw");
        assert_eq!(
            error.to_string(),
            "syntax error in `o<draw`: filter 'oracle' does not support the '<' operator"
        );
    }
}
