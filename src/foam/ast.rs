//! Document model for OpenFOAM dictionaries
//!
//! This module provides the parsed entry tree along with utilities for
//! tracking source positions and rendering entries back to text.
//!
//! ## Modules
//!
//! - `node` - Document, Dictionary, Entry and Keyword definitions
//! - `position` - Source location utilities for converting byte offsets
//! - `render` - Textual rendering of values and dictionaries
//! - `error` - Error types for parsing

pub mod error;
pub mod node;
pub mod position;
pub mod render;

// Re-export commonly used types at module root
pub use error::ParseError;
pub use node::{Dictionary, Document, Entry, EntryKind, Keyword, KeywordKind, ValueToken};
pub use position::{Position, SourceLocation};
pub use render::{render_entry_value, render_value};
