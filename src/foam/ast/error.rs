//! Error types for dictionary parsing

use super::position::Position;

/// Errors that can occur while turning dictionary text into a [`Document`](super::Document)
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    /// Input the lexer does not recognise (unterminated string, lone `#`, ...)
    #[error("unrecognised input '{fragment}' at {position}")]
    Lex { position: Position, fragment: String },

    /// Token stream does not follow the dictionary grammar
    #[error("syntax error at {position}: {message}")]
    Syntax { position: Position, message: String },

    /// Quoted keyword that is not a valid regular expression
    #[error("invalid keyword pattern \"{keyword}\" at {position}")]
    InvalidPattern {
        keyword: String,
        position: Position,
        #[source]
        source: regex::Error,
    },

    /// `$name` that does not resolve to an earlier entry
    #[error("attempt to use undefined variable {name} at {position}")]
    UndefinedVariable { name: String, position: Position },

    /// `$name;` in keyword position referring to something other than a dictionary
    #[error("cannot merge {name} at {position}: not a dictionary")]
    NotADictionary { name: String, position: Position },
}

impl ParseError {
    /// Source position the error refers to
    pub fn position(&self) -> Position {
        match self {
            ParseError::Lex { position, .. }
            | ParseError::Syntax { position, .. }
            | ParseError::InvalidPattern { position, .. }
            | ParseError::UndefinedVariable { position, .. }
            | ParseError::NotADictionary { position, .. } => *position,
        }
    }
}
