//! Flattened keyword listing
//!
//! Every keyword path of a dictionary tree together with the line it is
//! defined on, depth first in document order. For
//!
//! ```text
//! a { b 1; c { d 2; } }
//! ```
//!
//! the paths are `a`, `a.b`, `a.c`, `a.c.d`. A sub-dictionary is reported at
//! its opening-brace line, one before the line its body starts on.

use serde::Serialize;

use super::error::DictLookupError;
use super::lookup::lookup_scoped_dict;
use super::scope::components;
use crate::foam::ast::{Dictionary, EntryKind};

/// One flattened keyword path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordRecord {
    pub path: String,
    pub line: usize,
}

impl KeywordRecord {
    pub fn new(path: impl Into<String>, line: usize) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }
}

/// List every keyword path below `dict`.
///
/// Each sub-dictionary contributes its own record followed by its flattened
/// children, prefixed with its keyword.
pub fn flatten(dict: &Dictionary) -> Vec<KeywordRecord> {
    dict.entries
        .iter()
        .flat_map(|entry| {
            let keyword = entry.keyword.as_str();
            match &entry.kind {
                EntryKind::Dictionary(child) => {
                    let own = KeywordRecord::new(keyword, child.start_line.saturating_sub(1));
                    let nested = flatten(child)
                        .into_iter()
                        .map(|r| KeywordRecord::new(format!("{}.{}", keyword, r.path), r.line));
                    std::iter::once(own).chain(nested).collect::<Vec<_>>()
                }
                EntryKind::Value(_) => vec![KeywordRecord::new(keyword, entry.start_line)],
            }
        })
        .collect()
}

/// Flatten the sub-dictionary named by `scope` (the empty scope is `dict`).
///
/// Paths are prefixed with the scope's components as `flatten` writes them,
/// so a quoted pattern component appears without its quotes.
pub fn flatten_scope(
    dict: &Dictionary,
    scope: &str,
) -> Result<Vec<KeywordRecord>, DictLookupError> {
    let sub = lookup_scoped_dict(dict, scope)?;
    let prefix = if scope.is_empty() {
        String::new()
    } else {
        format!("{}.", components(scope).join("."))
    };

    Ok(flatten(sub)
        .into_iter()
        .map(|r| KeywordRecord::new(format!("{}{}", prefix, r.path), r.line))
        .collect())
}
