//! Command line argument parsing for the langdict CLI using clap.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::dictionary::config::BuilderConfig;
use crate::dictionary::document::JsonStyle;
use crate::phonetic::DoubleMetaphone;

/// langdict - build a word similarity dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "langdict")]
#[command(about = "Build a JSON dictionary of words linked by edit distance and sound")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LangDictArgs {
    /// Word list, one word per line
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Archaic word list, one word per line
    #[arg(short, long, value_name = "PATH")]
    pub archaic: Option<PathBuf>,

    /// Where to write the dictionary
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Edit distance at which words are linked
    #[arg(short, long, value_name = "INT", default_value_t = 1)]
    pub levenshtein: usize,

    /// Maximum phonetic key length
    #[arg(long, value_name = "INT", default_value_t = DoubleMetaphone::DEFAULT_KEY_LENGTH)]
    pub key_length: usize,

    /// Skip phonetic linking
    #[arg(long)]
    pub no_phonetic: bool,

    /// Compare words on a thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Number of worker threads (implies --parallel)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Write the dictionary without indentation
    #[arg(long)]
    pub compact: bool,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Format of the run summary
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,
}

impl LangDictArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Builder settings selected by the flags.
    pub fn builder_config(&self) -> BuilderConfig {
        let config = BuilderConfig::new(self.levenshtein)
            .with_phonetic(!self.no_phonetic)
            .with_key_length(self.key_length)
            .with_parallel(self.parallel);

        match self.threads {
            Some(threads) => config.with_threads(threads),
            None => config,
        }
    }

    /// Layout of the written dictionary.
    pub fn json_style(&self) -> JsonStyle {
        if self.compact {
            JsonStyle::Compact
        } else {
            JsonStyle::Pretty
        }
    }
}

/// Output formats for the run summary
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
