//! Intermediate AST structures that hold token spans instead of final nodes
//!
//! The grammar only decides structure. Keywords, lines and macro expansion are
//! resolved afterwards, when these nodes are converted into a
//! [`Document`](crate::foam::ast::Document).

use crate::foam::lexer::TokenSpan;
use std::ops::Range;

#[derive(Debug, Clone)]
pub(crate) enum EntryWithSpans {
    /// `keyword items* ;`
    Value {
        keyword: TokenSpan,
        items: Vec<TokenSpan>,
    },
    /// `keyword { entries }`
    Dictionary {
        keyword: TokenSpan,
        open: Range<usize>,
        entries: Vec<EntryWithSpans>,
    },
    /// `#name argument`
    Directive {
        directive: TokenSpan,
        argument: Vec<TokenSpan>,
    },
}

#[derive(Debug, Clone)]
pub(crate) struct DocumentWithSpans {
    pub(crate) entries: Vec<EntryWithSpans>,
}
