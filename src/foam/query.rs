//! Scoped queries over parsed dictionaries
//!
//! ## Modules
//!
//! - `scope` - colon/dot scoped names
//! - `lookup` - walking a scoped name down the entry tree
//! - `flatten` - listing every keyword path with its line
//! - `facade` - the text-in, result-out operations
//! - `error` - query error types

pub mod error;
pub mod facade;
pub mod flatten;
pub mod lookup;
pub mod scope;

pub use error::{DictLookupError, QueryError};
pub use facade::{
    get_all_keywords, get_entry_keywords, get_entry_value, get_keyword_line_number,
    get_scope_keywords,
};
pub use flatten::{flatten, flatten_scope, KeywordRecord};
pub use lookup::{lookup_enclosing_dict, lookup_scoped_dict, lookup_scoped_entry};
pub use scope::{resolve, split_last};
