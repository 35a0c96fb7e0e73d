//! Testing utilities for dictionary assertions
//!
//! Parser and conversion tests check whole trees with the fluent
//! [`assert_dict`] API instead of indexing into entries by hand:
//!
//! ```rust-example
//! use crate::foam::parser::{parse_document, ParseOptions};
//! use crate::foam::testing::assert_dict;
//!
//! let doc = parse_document("a { b 1; }", ParseOptions::literal())?;
//! assert_dict(&doc)
//!     .entry_count(1)
//!     .entry(0, |e| {
//!         e.keyword("a").assert_dict().entry(0, |b| {
//!             b.keyword("b").start_line(1).assert_value().text("1");
//!         });
//!     });
//! ```
//!
//! Shared sample dictionaries live in `tests/fixtures/`.

mod testing_assertions;

pub use testing_assertions::{
    assert_dict, DictionaryAssertion, EntryAssertion, ValueAssertion,
};
