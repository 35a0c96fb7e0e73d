//! Scoped lookup
//!
//! Walks a dotted path from a dictionary down to an entry. Each component is
//! matched literally first; with wildcards on, pattern keywords are tried next,
//! the most recently defined one winning.

use tracing::trace;

use super::error::DictLookupError;
use super::scope::components;
use crate::foam::ast::{Dictionary, Entry};

/// Find the entry named by a dotted path, or `None`.
pub fn lookup_scoped_entry<'a>(
    dict: &'a Dictionary,
    scoped: &str,
    allow_wildcards: bool,
) -> Option<&'a Entry> {
    if scoped.is_empty() {
        return None;
    }

    let parts = components(scoped);
    let (last, parents) = parts.split_last()?;

    let mut current = dict;
    for part in parents {
        let entry = current.find(part, allow_wildcards)?;
        trace!(component = %part, line = entry.start_line, "descending");
        // A value in an intermediate position ends the walk
        current = entry.dict()?;
    }

    let found = current.find(last, allow_wildcards);
    trace!(component = %last, found = found.is_some(), "lookup");
    found
}

/// Find a sub-dictionary, treating anything else as an error.
///
/// The empty name is `dict` itself. Wildcards are not used. The error names
/// the first component that is missing or not a dictionary.
pub fn lookup_scoped_dict<'a>(
    dict: &'a Dictionary,
    sub_dict_name: &str,
) -> Result<&'a Dictionary, DictLookupError> {
    if sub_dict_name.is_empty() {
        return Ok(dict);
    }
    descend(dict, &components(sub_dict_name))
}

/// The dictionary holding the leaf of `scoped`, together with the leaf keyword
pub fn lookup_enclosing_dict<'a>(
    dict: &'a Dictionary,
    scoped: &str,
) -> Result<(&'a Dictionary, String), DictLookupError> {
    let mut parts = components(scoped);
    let leaf = parts.pop().unwrap_or_default();
    let enclosing = descend(dict, &parts)?;
    Ok((enclosing, leaf))
}

fn descend<'a>(
    dict: &'a Dictionary,
    parts: &[String],
) -> Result<&'a Dictionary, DictLookupError> {
    let mut current = dict;
    for (depth, part) in parts.iter().enumerate() {
        match current.find(part, false).and_then(Entry::dict) {
            Some(child) => current = child,
            None => {
                return Err(DictLookupError::NotADictionary {
                    keyword: part.clone(),
                    parent: parts[..depth].join("."),
                    valid_keywords: current.keywords().map(str::to_string).collect(),
                })
            }
        }
    }
    Ok(current)
}
