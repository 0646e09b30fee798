//! Dictionary construction.
//!
//! Building runs four phases in a fixed order over an owned [`Graph`]:
//!
//! 1. load the real words and register them in the phonetic index,
//! 2. link real words whose edit distance equals the threshold,
//! 3. link real words that share a phonetic key,
//! 4. if an archaic list is given, link archaic words to real words and to
//!    each other.
//!
//! The pairwise passes compute one match list per row (the outer loop
//! index) and then apply the lists in row order. When a thread pool is
//! configured only the first step runs in parallel, so the graph is the
//! same whether or not parallelism is enabled.

use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, info};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::dictionary::config::BuilderConfig;
use crate::dictionary::graph::Graph;
use crate::dictionary::loader::load_words;
use crate::error::{LangDictError, Result};
use crate::phonetic::PhoneticIndex;
use crate::util::levenshtein::ExactDistanceMatcher;

/// Rows between progress log lines.
const PROGRESS_INTERVAL: usize = 1000;

/// Counters and timings collected while building.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub real_words: usize,
    pub archaic_words: usize,
    /// Real/real pairs linked by edit distance.
    pub distance_edges: usize,
    /// One-directional edges added by phonetic matching.
    pub phonetic_edges: usize,
    /// Archaic/real matches.
    pub archaic_links: usize,
    /// Archaic/archaic pairs linked by edit distance.
    pub archaic_edges: usize,
    pub load_time: Duration,
    pub distance_time: Duration,
    pub phonetic_time: Duration,
    pub archaic_time: Duration,
}

impl BuildStats {
    /// Wall time of all phases.
    pub fn total_time(&self) -> Duration {
        self.load_time + self.distance_time + self.phonetic_time + self.archaic_time
    }
}

/// The result of a build: the finished graph and its statistics.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub graph: Graph,
    pub stats: BuildStats,
}

/// Builds a [`Graph`] from a real word list and an optional archaic list.
///
/// A builder is consumed by [`DictionaryBuilder::build`]; phases cannot be
/// re-run on the same instance.
pub struct DictionaryBuilder {
    config: BuilderConfig,
    index: PhoneticIndex,
    graph: Graph,
    stats: BuildStats,
    pool: Option<ThreadPool>,
}

impl DictionaryBuilder {
    /// Create a builder, validating the configuration and setting up the
    /// thread pool when parallel comparison is enabled.
    pub fn new(config: BuilderConfig) -> Result<Self> {
        config.validate()?;

        let pool = if config.parallel {
            let pool = ThreadPoolBuilder::new()
                .num_threads(config.threads.unwrap_or(0))
                .build()
                .map_err(|e| LangDictError::thread_pool(e.to_string()))?;
            Some(pool)
        } else {
            None
        };

        Ok(DictionaryBuilder {
            index: PhoneticIndex::with_key_length(config.key_length),
            config,
            graph: Graph::new(),
            stats: BuildStats::default(),
            pool,
        })
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Read both word lists, then build.
    ///
    /// Both files are read before any comparison starts, so an unreadable
    /// archaic list fails the run without doing pairwise work.
    pub fn build_from_files<P: AsRef<Path>>(
        self,
        real_path: P,
        archaic_path: Option<P>,
    ) -> Result<BuildOutput> {
        let real_words = load_words(real_path)?;
        let archaic_words = archaic_path.map(load_words).transpose()?;

        Ok(self.build(real_words, archaic_words))
    }

    /// Run every phase and return the finished graph.
    pub fn build(mut self, real_words: Vec<String>, archaic_words: Option<Vec<String>>) -> BuildOutput {
        info!(
            "building dictionary: threshold={} phonetic={} parallel={}",
            self.config.threshold, self.config.phonetic, self.config.parallel
        );

        self.load_real_words(real_words);
        self.link_by_distance();
        if self.config.phonetic {
            self.link_by_phonetic_key();
        }
        match archaic_words {
            Some(words) => self.link_archaic_words(words),
            None => info!("no archaic word list, skipping archaic linking"),
        }

        BuildOutput {
            graph: self.graph,
            stats: self.stats,
        }
    }

    /// Phase 1.
    fn load_real_words(&mut self, words: Vec<String>) {
        let start = Instant::now();

        for word in words {
            if self.config.phonetic {
                self.index.insert(&word);
            }
            self.graph.real_mut().push(word);
        }

        self.stats.real_words = self.graph.real().len();
        self.stats.load_time = start.elapsed();
        info!(
            "loaded {} real words ({} duplicates, {} phonetic keys)",
            self.stats.real_words,
            self.graph.real().duplicate_count(),
            self.index.key_count()
        );
    }

    /// Phase 2.
    fn link_by_distance(&mut self) {
        let start = Instant::now();
        let threshold = self.config.threshold;
        let chars = split_chars(self.graph.real().iter().map(|entry| entry.word()));
        let count = chars.len();

        let rows = scan_rows(self.pool.as_ref(), count, |i| {
            let matcher = ExactDistanceMatcher::new(&chars[i], threshold);
            (i..count).filter(|&k| matcher.is_match(&chars[k])).collect()
        });

        for (i, matches) in rows.into_iter().enumerate() {
            for k in matches {
                if self.graph.link_real(i, k) {
                    self.stats.distance_edges += 1;
                }
            }
            log_progress("distance pass", i, count);
        }

        self.stats.distance_time = start.elapsed();
        info!(
            "distance pass linked {} pairs in {:?}",
            self.stats.distance_edges, self.stats.distance_time
        );
    }

    /// Phase 3.
    ///
    /// A phonetic match adds an edge on the querying word only. Matched
    /// words resolve to their first occurrence in load order.
    fn link_by_phonetic_key(&mut self) {
        let start = Instant::now();
        let count = self.graph.real().len();

        for i in 0..count {
            let targets: Vec<usize> = {
                let real = self.graph.real();
                let word = real.entries()[i].word();
                self.index
                    .lookup(word)
                    .into_iter()
                    .filter(|candidate| *candidate != word)
                    .filter_map(|candidate| real.index_of(candidate))
                    .collect()
            };

            for k in targets {
                if self.graph.link_phonetic(i, k) {
                    self.stats.phonetic_edges += 1;
                }
            }
            log_progress("phonetic pass", i, count);
        }

        self.stats.phonetic_time = start.elapsed();
        info!(
            "phonetic pass added {} edges in {:?}",
            self.stats.phonetic_edges, self.stats.phonetic_time
        );
    }

    /// Phase 4.
    fn link_archaic_words(&mut self, words: Vec<String>) {
        let start = Instant::now();
        for word in words {
            self.graph.archaic_mut().push(word);
        }
        self.stats.archaic_words = self.graph.archaic().len();

        let threshold = self.config.threshold;
        let real_chars = split_chars(self.graph.real().iter().map(|entry| entry.word()));
        let archaic_chars = split_chars(self.graph.archaic().iter().map(|entry| entry.word()));
        let count = archaic_chars.len();

        let real_rows = scan_rows(self.pool.as_ref(), count, |i| {
            let matcher = ExactDistanceMatcher::new(&archaic_chars[i], threshold);
            (0..real_chars.len())
                .filter(|&k| matcher.is_match(&real_chars[k]))
                .collect()
        });
        let archaic_rows = scan_rows(self.pool.as_ref(), count, |i| {
            let matcher = ExactDistanceMatcher::new(&archaic_chars[i], threshold);
            (i..count)
                .filter(|&k| matcher.is_match(&archaic_chars[k]))
                .collect()
        });

        for (i, (real_matches, archaic_matches)) in real_rows.into_iter().zip(archaic_rows).enumerate()
        {
            for k in real_matches {
                if self.graph.link_archaic_to_real(i, k) {
                    self.stats.archaic_links += 1;
                }
            }
            for k in archaic_matches {
                if self.graph.link_archaic(i, k) {
                    self.stats.archaic_edges += 1;
                }
            }
            log_progress("archaic pass", i, count);
        }

        self.stats.archaic_time = start.elapsed();
        info!(
            "archaic pass: {} words, {} links to real words, {} archaic pairs in {:?}",
            self.stats.archaic_words,
            self.stats.archaic_links,
            self.stats.archaic_edges,
            self.stats.archaic_time
        );
    }
}

fn split_chars<'a>(words: impl Iterator<Item = &'a str>) -> Vec<Vec<char>> {
    words.map(|word| word.chars().collect()).collect()
}

/// Compute one match list per row, in row order.
fn scan_rows<F>(pool: Option<&ThreadPool>, rows: usize, row_matches: F) -> Vec<Vec<usize>>
where
    F: Fn(usize) -> Vec<usize> + Sync + Send,
{
    match pool {
        Some(pool) => pool.install(|| (0..rows).into_par_iter().map(&row_matches).collect()),
        None => (0..rows).map(row_matches).collect(),
    }
}

fn log_progress(phase: &str, row: usize, total: usize) {
    if (row + 1) % PROGRESS_INTERVAL == 0 {
        debug!("{phase}: processed {} of {}", row + 1, total);
    }
}
