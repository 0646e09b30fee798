//! Word similarity dictionary.
//!
//! Loads word lists, links words by edit distance and phonetic key, and
//! writes the result as a JSON document.

pub mod builder;
pub mod config;
pub mod document;
pub mod entry;
pub mod graph;
pub mod loader;

pub use builder::{BuildOutput, BuildStats, DictionaryBuilder};
pub use config::BuilderConfig;
pub use document::{DictionaryDocument, DocumentEntry, JsonStyle};
pub use entry::{Entry, EntryKind};
pub use graph::{Collection, Graph};
pub use loader::{load_words, read_words};
