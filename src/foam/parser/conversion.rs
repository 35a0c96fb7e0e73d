//! Conversion from the span-based intermediate AST to the final [`Document`]
//!
//! Conversion keeps a stack of the dictionaries under construction. Entries are
//! added with [`Dictionary::add`], which applies the replace and merge rules,
//! and macro expansion reads earlier entries from the same stack.

use std::ops::Range;
use tracing::{debug, warn};

use super::api::ParseOptions;
use super::expansion::{classify_directive, resolve_variable, DirectiveAction};
use super::intermediate_ast::{DocumentWithSpans, EntryWithSpans};
use crate::foam::ast::{
    Dictionary, Document, Entry, EntryKind, Keyword, ParseError, SourceLocation, ValueToken,
};
use crate::foam::lexer::{Token, TokenSpan};

/// Strip the surrounding double quotes of a string token
pub(crate) fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}

pub(crate) struct Converter {
    location: SourceLocation,
    options: ParseOptions,
    scopes: Vec<Dictionary>,
}

impl Converter {
    pub(crate) fn new(source: &str, options: ParseOptions) -> Self {
        Self {
            location: SourceLocation::new(source),
            options,
            scopes: Vec::new(),
        }
    }

    pub(crate) fn convert_document(
        mut self,
        doc: DocumentWithSpans,
    ) -> Result<Document, ParseError> {
        self.scopes.push(Dictionary::new(1));
        self.convert_entries(doc.entries)?;
        Ok(Document::new(self.pop_scope()))
    }

    fn convert_entries(&mut self, entries: Vec<EntryWithSpans>) -> Result<(), ParseError> {
        entries
            .into_iter()
            .try_for_each(|entry| self.convert_entry(entry))
    }

    fn convert_entry(&mut self, entry: EntryWithSpans) -> Result<(), ParseError> {
        match entry {
            EntryWithSpans::Dictionary {
                keyword,
                open,
                entries,
            } => {
                let line = self.line(&keyword.1);
                let keyword = self.keyword(&keyword)?;
                let body_line = self.line(&open) + 1;
                self.scopes.push(Dictionary::new(body_line));
                let converted = self.convert_entries(entries);
                let dict = self.pop_scope();
                converted?;
                self.add(Entry::dictionary(keyword, line, dict));
                Ok(())
            }
            EntryWithSpans::Value { keyword, items } => {
                if self.options.expand && items.is_empty() {
                    if let Token::Variable(reference) = &keyword.0 {
                        return self.merge_reference(reference, &keyword.1);
                    }
                }
                let line = self.line(&keyword.1);
                let keyword = self.keyword(&keyword)?;
                let entry = self.value_entry(keyword, line, &items)?;
                self.add(entry);
                Ok(())
            }
            EntryWithSpans::Directive {
                directive,
                argument,
            } => self.convert_directive(directive, argument),
        }
    }

    /// `$dict;` in keyword position: copy the referenced entries into this scope
    fn merge_reference(&mut self, reference: &str, span: &Range<usize>) -> Result<(), ParseError> {
        let entry = resolve_variable(&self.scopes, reference)
            .cloned()
            .ok_or_else(|| ParseError::UndefinedVariable {
                name: reference.to_string(),
                position: self.location.byte_to_position(span.start),
            })?;

        match entry.kind {
            EntryKind::Dictionary(dict) => {
                debug!(reference, entries = dict.len(), "merging dictionary");
                dict.entries.into_iter().for_each(|e| self.add(e));
                Ok(())
            }
            EntryKind::Value(_) => Err(ParseError::NotADictionary {
                name: reference.to_string(),
                position: self.location.byte_to_position(span.start),
            }),
        }
    }

    fn value_entry(
        &self,
        keyword: Keyword,
        keyword_line: usize,
        items: &[TokenSpan],
    ) -> Result<Entry, ParseError> {
        if !self.options.expand {
            let tokens: Vec<ValueToken> = items.iter().map(|t| self.value_token(t)).collect();
            let line = tokens.first().map_or(keyword_line, |t| t.line);
            return Ok(Entry::value(keyword, line, tokens));
        }

        // A lone `$dict` value becomes a copy of the dictionary
        if let [(Token::Variable(reference), span)] = items {
            let referenced = self.lookup(reference, span)?;
            if let EntryKind::Dictionary(dict) = &referenced.kind {
                return Ok(Entry::dictionary(
                    keyword,
                    referenced.start_line,
                    dict.clone(),
                ));
            }
        }

        let mut tokens = Vec::with_capacity(items.len());
        for item in items {
            match item {
                (Token::Variable(reference), span) => {
                    let referenced = self.lookup(reference, span)?;
                    match &referenced.kind {
                        EntryKind::Value(values) => tokens.extend(values.iter().cloned()),
                        EntryKind::Dictionary(dict) => tokens.extend(dict.to_tokens()),
                    }
                }
                other => tokens.push(self.value_token(other)),
            }
        }

        let line = tokens.first().map_or(keyword_line, |t| t.line);
        Ok(Entry::value(keyword, line, tokens))
    }

    fn convert_directive(
        &mut self,
        directive: TokenSpan,
        argument: Vec<TokenSpan>,
    ) -> Result<(), ParseError> {
        let name = directive.0.as_str().to_string();
        let line = self.line(&directive.1);

        if !self.options.expand {
            let tokens: Vec<ValueToken> = argument.iter().map(|t| self.value_token(t)).collect();
            self.add(Entry::value(Keyword::directive(name), line, tokens));
            return Ok(());
        }

        match classify_directive(&name) {
            DirectiveAction::Remove => {
                for (token, span) in argument.iter().filter(|(t, _)| t.is_keyword()) {
                    let text = unquote(token.as_str());
                    let selector =
                        Keyword::quoted(text).map_err(|source| ParseError::InvalidPattern {
                            keyword: text.to_string(),
                            position: self.location.byte_to_position(span.start),
                            source,
                        })?;
                    let removed = self
                        .scopes
                        .last_mut()
                        .map_or(0, |scope| scope.remove_matching(&selector));
                    debug!(selector = text, removed, "#remove");
                }
            }
            DirectiveAction::Ignore => debug!(directive = %name, line, "ignoring directive"),
            DirectiveAction::Skip => {
                warn!(directive = %name, line, "directive is not executed, skipping")
            }
        }
        Ok(())
    }

    fn lookup(&self, reference: &str, span: &Range<usize>) -> Result<&Entry, ParseError> {
        resolve_variable(&self.scopes, reference).ok_or_else(|| ParseError::UndefinedVariable {
            name: reference.to_string(),
            position: self.location.byte_to_position(span.start),
        })
    }

    fn keyword(&self, (token, span): &TokenSpan) -> Result<Keyword, ParseError> {
        match token {
            Token::Str(text) => {
                let text = unquote(text);
                Keyword::quoted(text).map_err(|source| ParseError::InvalidPattern {
                    keyword: text.to_string(),
                    position: self.location.byte_to_position(span.start),
                    source,
                })
            }
            Token::Variable(text) => Ok(Keyword::variable(text.as_str())),
            other => Ok(Keyword::word(other.as_str())),
        }
    }

    fn value_token(&self, (token, span): &TokenSpan) -> ValueToken {
        ValueToken::new(token.as_str(), self.line(span))
    }

    fn line(&self, span: &Range<usize>) -> usize {
        self.location.line_of(span.start)
    }

    fn add(&mut self, entry: Entry) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.add(entry);
        }
    }

    fn pop_scope(&mut self) -> Dictionary {
        self.scopes.pop().unwrap_or_else(|| Dictionary::new(1))
    }
}
