//! Textual rendering of entries
//!
//! Values are printed as their tokens separated by single spaces, except that
//! no space follows an opening `(`/`[` and none precedes a closing `)`/`]`.
//! Dictionaries are printed the way OpenFOAM writes them:
//!
//! ```text
//! {
//!     type            fixedValue;
//!     nested
//!     {
//!         a               1;
//!     }
//! }
//! ```

use super::node::{Dictionary, Entry, EntryKind, KeywordKind, ValueToken};
use std::fmt::{self, Write};

const INDENT: &str = "    ";
const KEYWORD_WIDTH: usize = 16;

/// Join value tokens into their display form
pub fn render_value(tokens: &[ValueToken]) -> String {
    let mut out = String::new();
    let mut previous: Option<&str> = None;

    for token in tokens {
        let text = token.text.as_str();
        let glued = match previous {
            None => true,
            Some(prev) => prev == "(" || prev == "[" || text == ")" || text == "]",
        };
        if !glued {
            out.push(' ');
        }
        out.push_str(text);
        previous = Some(text);
    }

    out
}

/// Render an entry's payload: a value line or a dictionary block
pub fn render_entry_value(entry: &Entry) -> String {
    match &entry.kind {
        EntryKind::Value(tokens) => render_value(tokens),
        EntryKind::Dictionary(dict) => dict.to_string(),
    }
}

fn write_block(out: &mut String, dict: &Dictionary, depth: usize) -> fmt::Result {
    let indent = INDENT.repeat(depth);
    writeln!(out, "{}{{", indent)?;
    for entry in &dict.entries {
        write_member(out, entry, depth + 1)?;
    }
    writeln!(out, "{}}}", indent)
}

fn write_member(out: &mut String, entry: &Entry, depth: usize) -> fmt::Result {
    let indent = INDENT.repeat(depth);
    let keyword = entry.keyword.to_string();

    match &entry.kind {
        EntryKind::Dictionary(dict) => {
            writeln!(out, "{}{}", indent, keyword)?;
            write_block(out, dict, depth)
        }
        EntryKind::Value(tokens) if entry.keyword.kind() == KeywordKind::Directive => {
            if tokens.is_empty() {
                writeln!(out, "{}{}", indent, keyword)
            } else {
                writeln!(out, "{}{} {}", indent, keyword, render_value(tokens))
            }
        }
        EntryKind::Value(tokens) if tokens.is_empty() => {
            writeln!(out, "{}{};", indent, keyword)
        }
        EntryKind::Value(tokens) => {
            writeln!(
                out,
                "{}{:<width$} {};",
                indent,
                keyword,
                render_value(tokens),
                width = KEYWORD_WIDTH - 1
            )
        }
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_block(&mut out, self, 0)?;
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foam::ast::Keyword;

    fn tokens(texts: &[&str]) -> Vec<ValueToken> {
        texts.iter().map(|t| ValueToken::new(*t, 1)).collect()
    }

    #[test]
    fn test_render_plain_value() {
        assert_eq!(render_value(&tokens(&["Gauss", "linear"])), "Gauss linear");
    }

    #[test]
    fn test_render_list_value() {
        assert_eq!(
            render_value(&tokens(&["uniform", "(", "0", "0", "0", ")"])),
            "uniform (0 0 0)"
        );
    }

    #[test]
    fn test_render_dimensions() {
        assert_eq!(
            render_value(&tokens(&["[", "0", "2", "-1", "0", "0", "0", "0", "]"])),
            "[0 2 -1 0 0 0 0]"
        );
    }

    #[test]
    fn test_render_nested_lists() {
        assert_eq!(
            render_value(&tokens(&["(", "(", "1", "2", ")", "(", "3", ")", ")"])),
            "((1 2) (3))"
        );
    }

    #[test]
    fn test_render_empty_value() {
        assert_eq!(render_value(&[]), "");
    }

    #[test]
    fn test_render_dictionary() {
        let mut inner = Dictionary::new(4);
        inner.add(Entry::value(Keyword::word("a"), 4, tokens(&["1"])));

        let mut dict = Dictionary::new(2);
        dict.add(Entry::value(
            Keyword::word("type"),
            2,
            tokens(&["fixedValue"]),
        ));
        dict.add(Entry::dictionary(Keyword::word("nested"), 3, inner));
        dict.add(Entry::value(Keyword::word("flag"), 6, vec![]));

        assert_eq!(
            dict.to_string(),
            "{\n    type            fixedValue;\n    nested\n    {\n        a               1;\n    }\n    flag;\n}\n"
        );
    }

    #[test]
    fn test_render_long_keyword_keeps_one_space() {
        let mut dict = Dictionary::new(1);
        dict.add(Entry::value(
            Keyword::word("aVeryLongKeywordName"),
            1,
            tokens(&["1"]),
        ));
        assert_eq!(dict.to_string(), "{\n    aVeryLongKeywordName 1;\n}\n");
    }

    #[test]
    fn test_render_pattern_and_directive() {
        let mut dict = Dictionary::new(1);
        dict.add(Entry::value(
            Keyword::directive("#include"),
            1,
            tokens(&["\"common\""]),
        ));
        dict.add(Entry::value(
            Keyword::pattern("wall.*").unwrap(),
            2,
            tokens(&["zeroGradient"]),
        ));
        assert_eq!(
            dict.to_string(),
            "{\n    #include \"common\"\n    \"wall.*\"        zeroGradient;\n}\n"
        );
    }
}
