//! Word list loading.
//!
//! A word list is a plain text file with one word per line. Lines are taken
//! verbatim apart from the line terminator (`\n` or `\r\n`): blank lines
//! become empty words and surrounding whitespace is preserved. Bytes that
//! are not valid UTF-8 are replaced with U+FFFD instead of failing the load.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{LangDictError, Result};

/// Read every line of `reader` as one word.
pub fn read_words<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    let mut line = Vec::new();

    while reader.read_until(b'\n', &mut line)? > 0 {
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        words.push(String::from_utf8_lossy(&line).into_owned());
        line.clear();
    }

    Ok(words)
}

/// Load a word list from a file.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LangDictError::input(path, e))?;
    let words = read_words(BufReader::new(file)).map_err(|e| LangDictError::input(path, e))?;

    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
