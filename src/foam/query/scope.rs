//! Scoped names
//!
//! Callers may write a scope with colons (`boundaryField:inlet:type`) or with
//! dots (`boundaryField.inlet.type`). Internally every path is dotted.

/// Rewrite a colon-scoped name to the dotted form.
///
/// Names without `:` are returned unchanged. No trimming or validation happens.
pub fn resolve(entry_name: &str) -> String {
    if entry_name.contains(':') {
        entry_name.split(':').collect::<Vec<_>>().join(".")
    } else {
        entry_name.to_string()
    }
}

/// Split a dotted name at its last `.` into `(parent, leaf)`.
///
/// A name without a dot has the empty parent.
pub fn split_last(scoped: &str) -> (&str, &str) {
    match scoped.rsplit_once('.') {
        Some((parent, leaf)) => (parent, leaf),
        None => ("", scoped),
    }
}

/// Split a dotted name into components.
///
/// Dots inside double quotes do not separate, so `boundaryField.".*"` has the
/// two components `boundaryField` and `.*`. Quotes are removed.
pub fn components(scoped: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for c in scoped.chars() {
        match c {
            '"' => quoted = !quoted,
            '.' if !quoted => parts.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    parts.push(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_colons() {
        assert_eq!(resolve("a:b:c"), "a.b.c");
        assert_eq!(resolve("a.b"), "a.b");
        assert_eq!(resolve(""), "");
        assert_eq!(resolve(":a"), ".a");
        assert_eq!(resolve(" a : b "), " a . b ");
    }

    #[test]
    fn test_split_last() {
        assert_eq!(split_last("a.b.c"), ("a.b", "c"));
        assert_eq!(split_last("a"), ("", "a"));
        assert_eq!(split_last(""), ("", ""));
        assert_eq!(split_last("a."), ("a", ""));
    }

    #[test]
    fn test_components() {
        assert_eq!(components("a.b.c"), vec!["a", "b", "c"]);
        assert_eq!(components("a"), vec!["a"]);
        assert_eq!(components("boundaryField.\".*\""), vec!["boundaryField", ".*"]);
        assert_eq!(
            components("\"(inlet|outlet).*\".type"),
            vec!["(inlet|outlet).*", "type"]
        );
    }
}
