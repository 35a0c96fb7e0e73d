//! Implementation of the dictionary lexer
//!
//! This module provides convenience functions for tokenizing dictionary text.
//! The actual tokenization is handled entirely by logos.

use crate::foam::ast::{ParseError, SourceLocation};
use crate::foam::lexer::tokens::Token;
use crate::foam::lexer::TokenSpan;
use logos::Logos;

/// Convenience function to tokenize a string and collect all valid tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Tokenize a string, keeping the byte span of every token.
///
/// The first unrecognised fragment (an unterminated string, a lone `#`, ...)
/// aborts tokenization with [`ParseError::Lex`].
pub fn tokenize_with_spans(source: &str) -> Result<Vec<TokenSpan>, ParseError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let span = lexer.span();
                let position = SourceLocation::new(source).byte_to_position(span.start);
                return Err(ParseError::Lex {
                    position,
                    fragment: lexer.slice().to_string(),
                });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foam::ast::Position;

    #[test]
    fn test_simple_tokenization() {
        let tokens = tokenize("a 1;");
        assert_eq!(
            tokens,
            vec![
                Token::Word("a".to_string()),
                Token::Word("1".to_string()),
                Token::Semicolon
            ]
        );
    }

    #[test]
    fn test_nested_dictionary_tokenization() {
        let tokens = tokenize("a { b { c 1; } }");
        assert_eq!(tokens.len(), 9);
        assert_eq!(tokens[1], Token::OpenBrace);
        assert_eq!(tokens[8], Token::CloseBrace);
    }

    #[test]
    fn test_tokenize_with_spans() {
        let tokens = tokenize_with_spans("key  value;").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], (Token::Word("key".to_string()), 0..3));
        assert_eq!(tokens[1], (Token::Word("value".to_string()), 5..10));
        assert_eq!(tokens[2], (Token::Semicolon, 10..11));
    }

    #[test]
    fn test_lex_error_reports_position() {
        let err = tokenize_with_spans("a 1;\nb \"unterminated;\n").unwrap_err();
        match err {
            ParseError::Lex { position, fragment } => {
                assert_eq!(position, Position::new(2, 3));
                assert!(fragment.starts_with('"'));
            }
            other => panic!("expected a lex error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
        assert_eq!(tokenize_with_spans("").unwrap(), vec![]);
    }

    #[test]
    fn test_comment_only_input() {
        assert_eq!(tokenize("// nothing here\n/* or here */"), vec![]);
    }
}
