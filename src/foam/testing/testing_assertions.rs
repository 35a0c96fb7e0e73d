//! Fluent assertion API for dictionary trees

use crate::foam::ast::{render::render_value, Dictionary, Document, Entry, EntryKind, KeywordKind};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_dict(doc: &Document) -> DictionaryAssertion<'_> {
    DictionaryAssertion {
        dict: doc.root(),
        context: "root".to_string(),
    }
}

// ============================================================================
// Dictionary Assertions
// ============================================================================

pub struct DictionaryAssertion<'a> {
    dict: &'a Dictionary,
    context: String,
}

impl<'a> DictionaryAssertion<'a> {
    /// Assert the number of entries in the dictionary
    pub fn entry_count(self, expected: usize) -> Self {
        let actual = self.dict.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} entries, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.dict)
        );
        self
    }

    /// Assert the keywords of the entries, in order
    pub fn keywords(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.dict.keywords().collect();
        assert_eq!(actual, expected, "{}: keyword mismatch", self.context);
        self
    }

    /// Assert the line recorded for the block itself
    pub fn start_line(self, expected: usize) -> Self {
        assert_eq!(
            self.dict.start_line, expected,
            "{}: Expected block start line {}, found {}",
            self.context, expected, self.dict.start_line
        );
        self
    }

    /// Assert on a specific entry by index
    pub fn entry<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(EntryAssertion<'a>),
    {
        assert!(
            index < self.dict.len(),
            "{}: Entry index {} out of bounds (dictionary has {} entries)",
            self.context,
            index,
            self.dict.len()
        );

        assertion(EntryAssertion {
            entry: &self.dict.entries[index],
            context: format!("{}[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Entry Assertions
// ============================================================================

pub struct EntryAssertion<'a> {
    entry: &'a Entry,
    context: String,
}

impl<'a> EntryAssertion<'a> {
    pub fn keyword(self, expected: &str) -> Self {
        assert_eq!(
            self.entry.keyword.as_str(),
            expected,
            "{}: Expected keyword '{}', found '{}'",
            self.context,
            expected,
            self.entry.keyword.as_str()
        );
        self
    }

    pub fn keyword_kind(self, expected: KeywordKind) -> Self {
        assert_eq!(
            self.entry.keyword.kind(),
            expected,
            "{}: keyword kind mismatch",
            self.context
        );
        self
    }

    pub fn start_line(self, expected: usize) -> Self {
        assert_eq!(
            self.entry.start_line, expected,
            "{}: Expected start line {}, found {}",
            self.context, expected, self.entry.start_line
        );
        self
    }

    /// Assert this entry is a value and return value-specific assertions
    pub fn assert_value(self) -> ValueAssertion<'a> {
        match &self.entry.kind {
            EntryKind::Value(tokens) => ValueAssertion {
                tokens,
                context: self.context,
            },
            EntryKind::Dictionary(_) => {
                panic!("{}: Expected a value, found a dictionary", self.context)
            }
        }
    }

    /// Assert this entry is a dictionary and return dictionary assertions
    pub fn assert_dict(self) -> DictionaryAssertion<'a> {
        match &self.entry.kind {
            EntryKind::Dictionary(dict) => DictionaryAssertion {
                dict,
                context: format!("{}.{}", self.context, self.entry.keyword.as_str()),
            },
            EntryKind::Value(_) => {
                panic!("{}: Expected a dictionary, found a value", self.context)
            }
        }
    }
}

// ============================================================================
// Value Assertions
// ============================================================================

pub struct ValueAssertion<'a> {
    tokens: &'a [crate::foam::ast::ValueToken],
    context: String,
}

impl<'a> ValueAssertion<'a> {
    /// Assert the rendered value text
    pub fn text(self, expected: &str) -> Self {
        let actual = render_value(self.tokens);
        assert_eq!(
            actual, expected,
            "{}: Expected value '{}', found '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn token_count(self, expected: usize) -> Self {
        assert_eq!(
            self.tokens.len(),
            expected,
            "{}: Expected {} tokens, found {}",
            self.context,
            expected,
            self.tokens.len()
        );
        self
    }

    /// Assert the source line of every token, in order
    pub fn token_lines(self, expected: &[usize]) -> Self {
        let actual: Vec<usize> = self.tokens.iter().map(|t| t.line).collect();
        assert_eq!(actual, expected, "{}: token line mismatch", self.context);
        self
    }
}

fn summarize(dict: &Dictionary) -> String {
    dict.entries
        .iter()
        .map(|e| match e.kind {
            EntryKind::Value(_) => e.keyword.to_string(),
            EntryKind::Dictionary(_) => format!("{}{{..}}", e.keyword),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
