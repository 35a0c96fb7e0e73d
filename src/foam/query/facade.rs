//! Text-in, result-out query operations
//!
//! Every call parses its own [`Document`](crate::foam::ast::Document) and drops
//! it before returning, so calls share no state.

use tracing::debug;

use super::error::QueryError;
use super::flatten::{flatten, flatten_scope, KeywordRecord};
use super::lookup::lookup_scoped_entry;
use super::scope::resolve;
use crate::foam::ast::{render_entry_value, Document, EntryKind};
use crate::foam::parser::{parse_document, ParseOptions};

fn parse_for_keyword(
    keyword: &str,
    text: &str,
    options: ParseOptions,
) -> Result<Document, QueryError> {
    parse_document(text, options).map_err(|source| QueryError::IllKeyword {
        keyword: keyword.to_string(),
        content: text.to_string(),
        source,
    })
}

fn parse_content(text: &str) -> Result<Document, QueryError> {
    parse_document(text, ParseOptions::literal()).map_err(|source| QueryError::FaultyContent {
        content: text.to_string(),
        source,
    })
}

/// Value of the entry named by `entry_name`, or `""` when there is none.
///
/// Dictionaries are rendered as an OpenFOAM block.
pub fn get_entry_value(entry_name: &str, text: &str) -> Result<String, QueryError> {
    let path = resolve(entry_name);
    debug!(path = %path, "get_entry_value");

    let doc = parse_for_keyword(entry_name, text, ParseOptions::literal())?;
    Ok(lookup_scoped_entry(doc.root(), &path, true)
        .map(render_entry_value)
        .unwrap_or_default())
}

/// Child keywords of the dictionary named by `entry_name`.
///
/// Returns an empty list when the entry is missing or is not a dictionary.
pub fn get_entry_keywords(entry_name: &str, text: &str) -> Result<Vec<String>, QueryError> {
    let path = resolve(entry_name);
    debug!(path = %path, "get_entry_keywords");

    let doc = parse_for_keyword(entry_name, text, ParseOptions::literal())?;
    let keywords = match lookup_scoped_entry(doc.root(), &path, true).map(|e| &e.kind) {
        Some(EntryKind::Dictionary(dict)) => dict.keywords().map(str::to_string).collect(),
        Some(EntryKind::Value(_)) | None => Vec::new(),
    };
    Ok(keywords)
}

/// Every keyword path of the text with its line
pub fn get_all_keywords(text: &str) -> Result<Vec<KeywordRecord>, QueryError> {
    debug!("get_all_keywords");
    let doc = parse_content(text)?;
    Ok(flatten(doc.root()))
}

/// Keyword paths below one sub-dictionary.
///
/// Unlike the other queries a missing or non-dictionary scope is an error.
pub fn get_scope_keywords(scope: &str, text: &str) -> Result<Vec<KeywordRecord>, QueryError> {
    let path = resolve(scope);
    debug!(scope = %path, "get_scope_keywords");

    let doc = parse_content(text)?;
    Ok(flatten_scope(doc.root(), &path)?)
}

/// Line the entry named by `entry_name` starts on, or `-1` when there is none.
///
/// References are expanded first, so an entry whose value is `$other`
/// reports the line `other`'s value was written on.
pub fn get_keyword_line_number(entry_name: &str, text: &str) -> Result<i64, QueryError> {
    let path = resolve(entry_name);
    debug!(path = %path, "get_keyword_line_number");

    let doc = parse_for_keyword(entry_name, text, ParseOptions::expanded())?;
    Ok(lookup_scoped_entry(doc.root(), &path, true)
        .and_then(|e| i64::try_from(e.start_line).ok())
        .unwrap_or(-1))
}
