//! # langdict
//!
//! Builds a dictionary of word neighbors from plain word lists.
//!
//! ## Features
//!
//! - Orthographic neighbors: words exactly `n` edits apart
//! - Phonetic neighbors: words sharing a Double Metaphone key
//! - Optional archaic word list linked against the real words
//! - Deterministic output, with or without parallel comparison
//! - Sorted-key JSON output with string ids
//!
//! ```
//! use langdict::dictionary::{BuilderConfig, DictionaryBuilder, DictionaryDocument};
//!
//! let words = vec!["cat".to_string(), "bat".to_string()];
//! let output = DictionaryBuilder::new(BuilderConfig::new(1))?.build(words, None);
//! let document = DictionaryDocument::from_graph(&output.graph);
//!
//! assert_eq!(document.real["cat"].neighbor, vec![1]);
//! # Ok::<(), langdict::error::LangDictError>(())
//! ```

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod phonetic;
pub mod util;

pub mod prelude {
    pub use crate::dictionary::{
        BuildOutput, BuildStats, BuilderConfig, DictionaryBuilder, DictionaryDocument, EntryKind,
        Graph, JsonStyle,
    };
    pub use crate::error::{LangDictError, Result};
    pub use crate::phonetic::{DoubleMetaphone, PhoneticIndex, PhoneticKeys};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
