//! Node types of the dictionary tree
//!
//! A [`Document`] owns a root [`Dictionary`]. Every [`Entry`] is either a value
//! (a stream of [`ValueToken`]s) or a nested dictionary; the two cases are the
//! variants of [`EntryKind`] and are matched exhaustively wherever they matter.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Characters that turn a quoted keyword into a regular expression
static PATTERN_META: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.*+?^$()\[\]{}|\\]").expect("static pattern"));

/// How a keyword was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordKind {
    /// Bare word, or a quoted keyword without regex metacharacters
    Word,
    /// Quoted regular expression, e.g. `"(inlet|outlet).*"`
    Pattern,
    /// `$name` written where a keyword is expected
    Variable,
    /// `#name` written where a keyword is expected
    Directive,
}

/// Name of an entry, as written in the source (without quotes)
#[derive(Debug, Clone)]
pub struct Keyword {
    text: String,
    kind: KeywordKind,
    pattern: Option<Regex>,
}

impl Keyword {
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: KeywordKind::Word,
            pattern: None,
        }
    }

    /// Compile a pattern keyword. Matching is anchored at both ends.
    pub fn pattern(text: impl Into<String>) -> Result<Self, regex::Error> {
        let text = text.into();
        let regex = Regex::new(&format!("^(?:{})$", text))?;
        Ok(Self {
            text,
            kind: KeywordKind::Pattern,
            pattern: Some(regex),
        })
    }

    /// Keyword from the contents of a quoted string.
    ///
    /// Only strings containing regex metacharacters become patterns.
    pub fn quoted(text: impl Into<String>) -> Result<Self, regex::Error> {
        let text = text.into();
        if PATTERN_META.is_match(&text) {
            Self::pattern(text)
        } else {
            Ok(Self::word(text))
        }
    }

    pub fn variable(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: KeywordKind::Variable,
            pattern: None,
        }
    }

    pub fn directive(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: KeywordKind::Directive,
            pattern: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> KeywordKind {
        self.kind
    }

    pub fn is_pattern(&self) -> bool {
        self.kind == KeywordKind::Pattern
    }

    /// Whether a literal keyword is selected by this one
    pub fn matches(&self, candidate: &str) -> bool {
        match &self.pattern {
            Some(regex) => regex.is_match(candidate),
            None => self.text == candidate,
        }
    }

    /// Variable and directive keywords never replace or merge with earlier entries
    pub fn is_unique(&self) -> bool {
        matches!(self.kind, KeywordKind::Word | KeywordKind::Pattern)
    }
}

impl PartialEq for Keyword {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.kind == other.kind
    }
}

impl Eq for Keyword {}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            KeywordKind::Pattern => write!(f, "\"{}\"", self.text),
            _ => write!(f, "{}", self.text),
        }
    }
}

/// One token of an entry value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueToken {
    pub text: String,
    /// 1-based line the token was read from
    pub line: usize,
}

impl ValueToken {
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }
}

/// The two kinds of entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Value(Vec<ValueToken>),
    Dictionary(Dictionary),
}

/// A named node of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub keyword: Keyword,
    /// 1-based line where the entry's definition begins
    pub start_line: usize,
    pub kind: EntryKind,
}

impl Entry {
    pub fn value(keyword: Keyword, start_line: usize, tokens: Vec<ValueToken>) -> Self {
        Self {
            keyword,
            start_line,
            kind: EntryKind::Value(tokens),
        }
    }

    pub fn dictionary(keyword: Keyword, start_line: usize, dict: Dictionary) -> Self {
        Self {
            keyword,
            start_line,
            kind: EntryKind::Dictionary(dict),
        }
    }

    pub fn is_dict(&self) -> bool {
        matches!(self.kind, EntryKind::Dictionary(_))
    }

    pub fn dict(&self) -> Option<&Dictionary> {
        match &self.kind {
            EntryKind::Dictionary(dict) => Some(dict),
            EntryKind::Value(_) => None,
        }
    }

    pub fn tokens(&self) -> Option<&[ValueToken]> {
        match &self.kind {
            EntryKind::Value(tokens) => Some(tokens),
            EntryKind::Dictionary(_) => None,
        }
    }
}

/// An ordered collection of entries (a `{ ... }` block, or the whole file)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    pub entries: Vec<Entry>,
    /// Line after the opening brace; 1 for the root
    pub start_line: usize,
}

impl Dictionary {
    pub fn new(start_line: usize) -> Self {
        Self {
            entries: Vec::new(),
            start_line,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keywords of the direct children, in document order
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.keyword.as_str())
    }

    /// Find a direct child.
    ///
    /// Literal keywords are tried first. With `pattern_match`, pattern keywords
    /// are then tried from the last one inserted to the first.
    pub fn find(&self, keyword: &str, pattern_match: bool) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| !e.keyword.is_pattern() && e.keyword.as_str() == keyword)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|e| e.keyword.is_pattern() && e.keyword.as_str() == keyword)
            })
            .or_else(|| {
                if !pattern_match {
                    return None;
                }
                self.entries
                    .iter()
                    .rev()
                    .find(|e| e.keyword.is_pattern() && e.keyword.matches(keyword))
            })
    }

    /// Add an entry the way OpenFOAM reads a dictionary.
    ///
    /// A repeated keyword replaces the earlier value in place, and two
    /// dictionaries under the same keyword are merged recursively. Variable
    /// and directive keywords are always appended.
    pub fn add(&mut self, entry: Entry) {
        if !entry.keyword.is_unique() {
            self.entries.push(entry);
            return;
        }

        let existing = self
            .entries
            .iter()
            .position(|e| e.keyword.is_unique() && e.keyword.as_str() == entry.keyword.as_str());

        let Some(index) = existing else {
            self.entries.push(entry);
            return;
        };

        match (&mut self.entries[index].kind, entry.kind) {
            (EntryKind::Dictionary(current), EntryKind::Dictionary(incoming)) => {
                for child in incoming.entries {
                    current.add(child);
                }
            }
            (_, kind) => {
                self.entries[index] = Entry {
                    keyword: entry.keyword,
                    start_line: entry.start_line,
                    kind,
                };
            }
        }
    }

    /// Remove every direct child selected by `selector`; returns how many went
    pub fn remove_matching(&mut self, selector: &Keyword) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|e| !(e.keyword.is_unique() && selector.matches(e.keyword.as_str())));
        before - self.entries.len()
    }

    /// Token stream equivalent of this block, braces included
    pub fn to_tokens(&self) -> Vec<ValueToken> {
        let open_line = self.start_line.saturating_sub(1).max(1);
        let mut tokens = vec![ValueToken::new("{", open_line)];
        let mut last_line = open_line;
        for entry in &self.entries {
            tokens.push(ValueToken::new(entry.keyword.to_string(), entry.start_line));
            match &entry.kind {
                EntryKind::Value(values) => {
                    tokens.extend(values.iter().cloned());
                    last_line = values.last().map_or(entry.start_line, |t| t.line);
                    tokens.push(ValueToken::new(";", last_line));
                }
                EntryKind::Dictionary(dict) => {
                    let nested = dict.to_tokens();
                    last_line = nested.last().map_or(entry.start_line, |t| t.line);
                    tokens.extend(nested);
                }
            }
        }
        tokens.push(ValueToken::new("}", last_line));
        tokens
    }
}

/// The root dictionary of one parsed text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Dictionary,
}

impl Document {
    pub fn new(root: Dictionary) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Dictionary {
        &self.root
    }

    pub fn into_root(self) -> Dictionary {
        self.root
    }
}
