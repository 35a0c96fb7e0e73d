//! # foamdict
//!
//! Scoped queries over OpenFOAM dictionary files.
//!
//! A dictionary is parsed fresh for every query; nothing is cached or shared
//! between calls. The four query entry points are re-exported here:
//!
//! - [`get_entry_value`] - textual value of a scoped entry (`a:b:c`)
//! - [`get_entry_keywords`] - child keywords of a scoped sub-dictionary
//! - [`get_all_keywords`] - every keyword path with its source line
//! - [`get_keyword_line_number`] - source line of a scoped entry
//!
//! ## Testing
//!
//! Fluent assertions over parsed dictionaries live in the [testing module](foam::testing).

pub mod foam;

pub use foam::query::{
    get_all_keywords, get_entry_keywords, get_entry_value, get_keyword_line_number,
    get_scope_keywords, KeywordRecord, QueryError,
};
