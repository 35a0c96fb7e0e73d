//! Variable references and directives
//!
//! References are resolved against the stack of dictionaries that are still
//! being built, innermost last, so only entries defined before the reference
//! are visible:
//!
//! - `$name` searches the current scope, then each enclosing scope.
//! - `$:a.b` starts at the top-level dictionary.
//! - `$.a` stays in the current scope, and every further dot climbs one level.
//! - The remaining dotted components walk downward, honouring pattern keywords.

use crate::foam::ast::{Dictionary, Entry};
use tracing::trace;

/// What conversion does with a directive when expansion is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DirectiveAction {
    /// `#remove`: drop matching entries from the current scope
    Remove,
    /// `#inputMode`: accepted, no effect
    Ignore,
    /// File and process directives (`#include`, `#calc`, ...): not executed
    Skip,
}

pub(crate) fn classify_directive(name: &str) -> DirectiveAction {
    match name {
        "#remove" => DirectiveAction::Remove,
        "#inputMode" => DirectiveAction::Ignore,
        _ => DirectiveAction::Skip,
    }
}

/// Strip the `$` and any `{}` around a reference
pub(crate) fn variable_name(reference: &str) -> &str {
    let name = reference.strip_prefix('$').unwrap_or(reference);
    name.strip_prefix('{')
        .and_then(|n| n.strip_suffix('}'))
        .unwrap_or(name)
}

/// Find the entry a `$reference` points to
pub(crate) fn resolve_variable<'a>(scopes: &'a [Dictionary], reference: &str) -> Option<&'a Entry> {
    let name = variable_name(reference);
    trace!(reference, "resolving variable");

    if let Some(path) = name.strip_prefix(':') {
        let (first, rest) = split_first(path)?;
        let entry = scopes.first()?.find(first, true)?;
        return walk(entry, rest);
    }

    if name.starts_with('.') {
        let dots = name.chars().take_while(|c| *c == '.').count();
        let path = &name[dots..];
        let index = scopes.len().checked_sub(dots)?;
        let (first, rest) = split_first(path)?;
        let entry = scopes.get(index)?.find(first, true)?;
        return walk(entry, rest);
    }

    let (first, rest) = split_first(name)?;
    let entry = scopes
        .iter()
        .rev()
        .find_map(|scope| scope.find(first, true))?;
    walk(entry, rest)
}

fn split_first(path: &str) -> Option<(&str, Option<&str>)> {
    if path.is_empty() {
        return None;
    }
    match path.split_once('.') {
        Some((first, rest)) => Some((first, Some(rest))),
        None => Some((path, None)),
    }
}

fn walk<'a>(entry: &'a Entry, rest: Option<&str>) -> Option<&'a Entry> {
    let Some(rest) = rest else {
        return Some(entry);
    };
    rest.split('.')
        .try_fold(entry, |current, component| current.dict()?.find(component, true))
}
