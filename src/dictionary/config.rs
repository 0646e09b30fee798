//! Configuration for dictionary construction.

use serde::{Deserialize, Serialize};

use crate::error::{LangDictError, Result};
use crate::phonetic::DoubleMetaphone;

/// Configuration for [`DictionaryBuilder`](crate::dictionary::DictionaryBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Edit distance at which two words are linked. Pairs closer than this
    /// are not linked.
    pub threshold: usize,

    /// Whether to run the phonetic linking pass.
    pub phonetic: bool,

    /// Maximum length of phonetic keys.
    pub key_length: usize,

    /// Run the pairwise passes on a thread pool.
    pub parallel: bool,

    /// Thread pool size for parallel execution.
    /// If None, rayon picks the number of CPU cores.
    pub threads: Option<usize>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            threshold: 1,
            phonetic: true,
            key_length: DoubleMetaphone::DEFAULT_KEY_LENGTH,
            parallel: false,
            threads: None,
        }
    }
}

impl BuilderConfig {
    /// Create a config with the given threshold and defaults otherwise.
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    /// Set the edit-distance threshold.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enable or disable phonetic linking.
    pub fn with_phonetic(mut self, phonetic: bool) -> Self {
        self.phonetic = phonetic;
        self
    }

    /// Set the phonetic key length.
    pub fn with_key_length(mut self, key_length: usize) -> Self {
        self.key_length = key_length;
        self
    }

    /// Enable or disable parallel comparison.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the thread pool size. Implies parallel comparison.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self.parallel = true;
        self
    }

    /// Check the configuration for values the builder cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.key_length == 0 {
            return Err(LangDictError::invalid_argument(
                "phonetic key length must be at least 1",
            ));
        }
        if self.threads == Some(0) {
            return Err(LangDictError::invalid_argument(
                "thread count must be at least 1",
            ));
        }
        Ok(())
    }
}
