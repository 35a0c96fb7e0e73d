//! Error types for queries

use crate::foam::ast::ParseError;

/// Strict sub-dictionary lookup failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictLookupError {
    #[error(
        "keyword '{keyword}' is undefined or not a dictionary in '{}', valid keywords: {}",
        display_parent(.parent),
        .valid_keywords.join(", ")
    )]
    NotADictionary {
        keyword: String,
        /// Dotted name of the dictionary that was searched, empty for the root
        parent: String,
        valid_keywords: Vec<String>,
    },
}

fn display_parent(parent: &str) -> &str {
    if parent.is_empty() {
        "<root>"
    } else {
        parent
    }
}

/// Errors returned by the query operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum QueryError {
    /// Parsing failed while looking up a keyword
    #[error("cannot look up '{keyword}', content could not be parsed: {source}\n{content}")]
    IllKeyword {
        keyword: String,
        content: String,
        #[source]
        source: ParseError,
    },

    /// Parsing failed while listing keywords
    #[error("content could not be parsed: {source}\n{content}")]
    FaultyContent {
        content: String,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Lookup(#[from] DictLookupError),
}

impl QueryError {
    /// The text that failed to parse, if parsing was the problem
    pub fn content(&self) -> Option<&str> {
        match self {
            QueryError::IllKeyword { content, .. } | QueryError::FaultyContent { content, .. } => {
                Some(content)
            }
            QueryError::Lookup(_) => None,
        }
    }

    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            QueryError::IllKeyword { source, .. } | QueryError::FaultyContent { source, .. } => {
                Some(source)
            }
            QueryError::Lookup(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foam::ast::Position;

    fn syntax() -> ParseError {
        ParseError::Syntax {
            position: Position::new(1, 10),
            message: "unexpected end of input".to_string(),
        }
    }

    #[test]
    fn test_ill_keyword_message_names_keyword_and_content() {
        let err = QueryError::IllKeyword {
            keyword: "a.b".to_string(),
            content: "keyword 1".to_string(),
            source: syntax(),
        };
        let message = err.to_string();
        assert!(message.contains("'a.b'"));
        assert!(message.contains("keyword 1"));
        assert!(message.contains("1:10"));
        assert_eq!(err.content(), Some("keyword 1"));
        assert!(err.parse_error().is_some());
    }

    #[test]
    fn test_lookup_error_message() {
        let err = DictLookupError::NotADictionary {
            keyword: "c".to_string(),
            parent: String::new(),
            valid_keywords: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "keyword 'c' is undefined or not a dictionary in '<root>', valid keywords: a, b"
        );

        let err = QueryError::from(err);
        assert_eq!(err.content(), None);
    }
}
