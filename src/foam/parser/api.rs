//! Public API for the parser.

use chumsky::error::SimpleReason;
use chumsky::prelude::*;
use tracing::debug;

use super::combinators::{document, ParserError};
use super::conversion::Converter;
use super::intermediate_ast::DocumentWithSpans;
use crate::foam::ast::{Document, ParseError, SourceLocation};
use crate::foam::lexer::{tokenize_with_spans, TokenSpan};

/// How references and directives are treated while parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Substitute `$variables` and apply `#remove`. When off, both are kept
    /// literally as entries and tokens.
    pub expand: bool,
}

impl ParseOptions {
    pub fn expanded() -> Self {
        Self { expand: true }
    }

    pub fn literal() -> Self {
        Self { expand: false }
    }
}

/// Parse dictionary text into a [`Document`].
pub fn parse_document(source: &str, options: ParseOptions) -> Result<Document, ParseError> {
    debug!(bytes = source.len(), expand = options.expand, "parsing dictionary");

    let tokens = tokenize_with_spans(source)?;
    let spans = parse_with_source(tokens, source)?;
    let doc = Converter::new(source, options).convert_document(spans)?;

    debug!(entries = doc.root().len(), "parsed dictionary");
    Ok(doc)
}

/// Run the grammar over a token stream, mapping failures to [`ParseError::Syntax`]
pub(crate) fn parse_with_source(
    tokens: Vec<TokenSpan>,
    source: &str,
) -> Result<DocumentWithSpans, ParseError> {
    document()
        .parse(tokens)
        .map_err(|errors| syntax_error(source, errors))
}

fn syntax_error(source: &str, errors: Vec<ParserError>) -> ParseError {
    let location = SourceLocation::new(source);
    let end = location.byte_to_position(source.len());

    let Some(error) = errors.into_iter().next() else {
        return ParseError::Syntax {
            position: end,
            message: "invalid dictionary".to_string(),
        };
    };

    let (position, found) = match error.found() {
        Some((token, span)) => (
            location.byte_to_position(span.start),
            format!("unexpected '{}'", token),
        ),
        None => (end, "unexpected end of input".to_string()),
    };

    let message = match error.reason() {
        SimpleReason::Unclosed { delimiter, .. } => {
            format!("{}, unclosed '{}'", found, delimiter.0)
        }
        SimpleReason::Custom(custom) => custom.clone(),
        SimpleReason::Unexpected => found,
    };

    ParseError::Syntax { position, message }
}
