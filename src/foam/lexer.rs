//! Lexer module for the OpenFOAM dictionary format
//!
//! This module contains the tokenization logic for dictionary files,
//! including token definitions and the lexer implementation.
//!
//! Comments and whitespace never reach the parser: they are skipped by logos.
//! Line information is not carried by tokens either. Every token keeps its
//! byte span, and spans are mapped to lines only once the tree is built (see
//! [SourceLocation](crate::foam::ast::SourceLocation)).

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use tokens::Token;

/// Type alias for a token paired with its byte span in the source
pub type TokenSpan = (Token, std::ops::Range<usize>);
