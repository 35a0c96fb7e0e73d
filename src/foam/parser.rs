//! Parser for OpenFOAM dictionaries using chumsky
//!
//! Parsing runs in three stages:
//!
//! 1. [`lexer`](crate::foam::lexer) turns text into tokens with byte spans.
//! 2. The grammar in `combinators` builds a span-based intermediate AST.
//! 3. `conversion` turns that into a [`Document`](crate::foam::ast::Document),
//!    computing line numbers, applying the duplicate-keyword rules and, when
//!    [`ParseOptions::expand`] is set, expanding `$variables` and directives.
//!
//! ## Testing
//!
//! Parser tests use the fluent assertions in [`crate::foam::testing`].

pub mod api;
mod combinators;
mod conversion;
mod expansion;
mod intermediate_ast;


pub use api::{parse_document, ParseOptions};
