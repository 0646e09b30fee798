//! Shared utility modules used across langdict components.

pub mod levenshtein;
