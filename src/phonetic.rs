//! Phonetic encoding and indexing.
//!
//! Words that sound alike are found by encoding them with Double Metaphone
//! and grouping them by key.

pub mod double_metaphone;
pub mod index;

pub use double_metaphone::{DoubleMetaphone, PhoneticKeys};
pub use index::PhoneticIndex;
