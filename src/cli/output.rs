//! Output formatting for the run summary.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cli::args::{LangDictArgs, OutputFormat};
use crate::dictionary::builder::BuildStats;
use crate::error::Result;

/// Summary of one dictionary build.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildSummary {
    pub output: String,
    pub real_words: usize,
    pub archaic_words: usize,
    pub document_entries: usize,
    pub distance_edges: usize,
    pub phonetic_edges: usize,
    pub archaic_links: usize,
    pub archaic_edges: usize,
    pub load_ms: u64,
    pub distance_ms: u64,
    pub phonetic_ms: u64,
    pub archaic_ms: u64,
    pub write_ms: u64,
    pub total_ms: u64,
}

impl BuildSummary {
    /// Summarize a build whose document was written to `output`.
    pub fn new(output: String, stats: &BuildStats, document_entries: usize, write_time: Duration) -> Self {
        BuildSummary {
            output,
            real_words: stats.real_words,
            archaic_words: stats.archaic_words,
            document_entries,
            distance_edges: stats.distance_edges,
            phonetic_edges: stats.phonetic_edges,
            archaic_links: stats.archaic_links,
            archaic_edges: stats.archaic_edges,
            load_ms: millis(stats.load_time),
            distance_ms: millis(stats.distance_time),
            phonetic_ms: millis(stats.phonetic_time),
            archaic_ms: millis(stats.archaic_time),
            write_ms: millis(write_time),
            total_ms: millis(stats.total_time() + write_time),
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LangDictArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LangDictArgs) -> Result<()> {
    if args.verbosity() == 0 {
        return Ok(());
    }

    println!("{message}");
    println!();

    let value = serde_json::to_value(result)?;
    for line in format_lines(&value) {
        println!("{line}");
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

/// One `key: value` line per field of an object.
fn format_lines(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Object(obj) => obj
            .iter()
            .map(|(key, val)| format!("{}: {}", key.replace('_', " "), format_value(val)))
            .collect(),
        _ => vec![format_value(value)],
    }
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
