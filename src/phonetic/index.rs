//! Phonetic key index.
//!
//! Maps each phonetic key to the multiset of words carrying it. Words are
//! registered under their primary key and, when present, their alternate
//! key. Duplicate words are kept; lookups de-duplicate.

use ahash::{AHashMap, AHashSet};

use crate::phonetic::double_metaphone::{DoubleMetaphone, PhoneticKeys};

/// An index from phonetic key to the words that encode to it.
#[derive(Debug, Clone, Default)]
pub struct PhoneticIndex {
    encoder: DoubleMetaphone,
    /// Words per key, in insertion order.
    buckets: AHashMap<String, Vec<String>>,
    /// Number of `insert` calls.
    word_count: usize,
}

impl PhoneticIndex {
    /// Create an empty index using the given encoder.
    pub fn new(encoder: DoubleMetaphone) -> Self {
        PhoneticIndex {
            encoder,
            buckets: AHashMap::new(),
            word_count: 0,
        }
    }

    /// Create an empty index whose keys are at most `key_length` characters.
    pub fn with_key_length(key_length: usize) -> Self {
        Self::new(DoubleMetaphone::new(key_length))
    }

    /// The encoder used for inserts and lookups.
    pub fn encoder(&self) -> &DoubleMetaphone {
        &self.encoder
    }

    /// Compute the keys of a word without touching the index.
    pub fn keys_for(&self, word: &str) -> PhoneticKeys {
        self.encoder.encode(word)
    }

    /// Register a word under its primary and alternate keys.
    ///
    /// Words without an encodable letter (empty primary key) are not
    /// indexed under the empty key.
    pub fn insert(&mut self, word: &str) -> PhoneticKeys {
        let keys = self.encoder.encode(word);
        for key in keys.keys() {
            self.insert_key(key, word);
        }
        self.word_count += 1;
        keys
    }

    /// Register `word` under an explicit key.
    pub fn insert_key(&mut self, key: &str, word: &str) {
        self.buckets
            .entry(key.to_string())
            .or_default()
            .push(word.to_string());
    }

    /// Words stored under `key`, in insertion order.
    pub fn lookup_key(&self, key: &str) -> &[String] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct words sharing a primary or alternate key with `word`.
    ///
    /// The primary bucket is read first, then the alternate bucket; each in
    /// insertion order. If `word` itself was inserted it is part of the
    /// result, callers exclude self-matches.
    pub fn lookup(&self, word: &str) -> Vec<&str> {
        let keys = self.encoder.encode(word);
        let mut seen = AHashSet::new();
        let mut matches = Vec::new();

        for key in keys.keys() {
            for candidate in self.lookup_key(key) {
                if seen.insert(candidate.as_str()) {
                    matches.push(candidate.as_str());
                }
            }
        }

        matches
    }

    /// Number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of words inserted through [`PhoneticIndex::insert`].
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Whether nothing has been indexed.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
