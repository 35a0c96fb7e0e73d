//! Parser combinators for the dictionary grammar.

use chumsky::prelude::*;

use super::intermediate_ast::{DocumentWithSpans, EntryWithSpans};
use crate::foam::lexer::{Token, TokenSpan};

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenSpan>;

/// Helper: match a specific token, keeping its span
pub(crate) fn token(t: Token) -> impl Parser<TokenSpan, TokenSpan, Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenSpan| tok == &t)
}

/// Any token that can name an entry
pub(crate) fn keyword() -> impl Parser<TokenSpan, TokenSpan, Error = ParserError> + Clone {
    filter(|(t, _): &TokenSpan| t.is_keyword())
}

/// A single token of an entry value
pub(crate) fn value_atom() -> impl Parser<TokenSpan, TokenSpan, Error = ParserError> + Clone {
    filter(|(t, _): &TokenSpan| t.is_value_atom())
}

/// Balanced `( )`, `[ ]` or `{ }` group, delimiters included.
///
/// Inside a group `;` is an ordinary token, so `#codeStream { code #{ .. #}; }`
/// and lists of dictionaries are read as one item.
pub(crate) fn group() -> impl Parser<TokenSpan, Vec<TokenSpan>, Error = ParserError> + Clone {
    recursive(|group| {
        let inner = filter(|(t, _): &TokenSpan| t.is_value_atom() || *t == Token::Semicolon)
            .map(|t| vec![t])
            .or(group)
            .repeated()
            .flatten();

        let delimited = move |open: Token, close: Token| {
            token(open)
                .then(inner.clone())
                .then(token(close))
                .map(|((open, mut items), close)| {
                    items.insert(0, open);
                    items.push(close);
                    items
                })
        };

        choice((
            delimited(Token::OpenParen, Token::CloseParen),
            delimited(Token::OpenBracket, Token::CloseBracket),
            delimited(Token::OpenBrace, Token::CloseBrace),
        ))
    })
}

/// Value of a `keyword items* ;` entry.
///
/// The first item is an atom or a `( )`/`[ ]` group; a leading `{` would make
/// the entry a dictionary. Later items may be brace groups as well.
pub(crate) fn value_items() -> impl Parser<TokenSpan, Vec<TokenSpan>, Error = ParserError> + Clone
{
    let list_group =
        filter(|(t, _): &TokenSpan| matches!(t, Token::OpenParen | Token::OpenBracket))
            .rewind()
            .ignore_then(group());

    let first = value_atom().map(|t| vec![t]).or(list_group);
    let rest = value_atom()
        .map(|t| vec![t])
        .or(group())
        .repeated()
        .flatten();

    first.then(rest).map(|(mut items, mut rest)| {
        items.append(&mut rest);
        items
    })
}

/// Argument of a `#directive`: exactly one atom or group
pub(crate) fn directive_argument(
) -> impl Parser<TokenSpan, Vec<TokenSpan>, Error = ParserError> + Clone {
    value_atom().map(|t| vec![t]).or(group())
}

/// Parse the entries of one dictionary body (or of the whole file)
pub(crate) fn entries() -> impl Parser<TokenSpan, Vec<EntryWithSpans>, Error = ParserError> + Clone
{
    recursive(|entries| {
        let dictionary = keyword()
            .then(token(Token::OpenBrace))
            .then(entries)
            .then_ignore(token(Token::CloseBrace))
            .map(|((keyword, (_, open)), entries)| EntryWithSpans::Dictionary {
                keyword,
                open,
                entries,
            });

        let value = keyword()
            .then(value_items().or_not())
            .then_ignore(token(Token::Semicolon))
            .map(|(keyword, items)| EntryWithSpans::Value {
                keyword,
                items: items.unwrap_or_default(),
            });

        let directive = filter(|(t, _): &TokenSpan| matches!(t, Token::Directive(_)))
            .then(directive_argument())
            .then_ignore(token(Token::Semicolon).or_not())
            .map(|(directive, argument)| EntryWithSpans::Directive {
                directive,
                argument,
            });

        // A stray `;` (e.g. after a closing brace) is an empty statement
        let empty = token(Token::Semicolon).to(None);

        choice((
            dictionary.map(Some),
            value.map(Some),
            directive.map(Some),
            empty,
        ))
        .repeated()
        .map(|entries: Vec<Option<EntryWithSpans>>| entries.into_iter().flatten().collect())
    })
}

/// Parse a whole document
pub(crate) fn document() -> impl Parser<TokenSpan, DocumentWithSpans, Error = ParserError> {
    entries()
        .then_ignore(end())
        .map(|entries| DocumentWithSpans { entries })
}
