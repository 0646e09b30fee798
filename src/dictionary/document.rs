//! The JSON dictionary document.
//!
//! The document is an object with a `"real"` and an `"archaic"` section,
//! each mapping a word to its entry:
//!
//! ```json
//! {
//!     "archaic": {},
//!     "real": {
//!         "bat": { "archaic": [], "id": "1", "neighbor": [0], "type": "REAL_WORD" },
//!         "cat": { "archaic": [], "id": "0", "neighbor": [1], "type": "REAL_WORD" }
//!     }
//! }
//! ```
//!
//! Keys are sorted and ids are strings. Real entries use their load index as
//! id; archaic entries are numbered after the real words (`N + index`).
//! Index lists always refer to load-order positions within one collection:
//!
//! | entry   | `neighbor`                 | `archaic`                    |
//! |---------|----------------------------|------------------------------|
//! | real    | real neighbors             | archaic words that match it  |
//! | archaic | real words it matches      | archaic neighbors            |
//!
//! A word that occurs more than once maps to a single key; the entry of the
//! later occurrence replaces the earlier one.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use crate::dictionary::entry::{Entry, EntryKind};
use crate::dictionary::graph::{Collection, Graph};
use crate::error::Result;

/// Indentation of pretty output.
const INDENT: &[u8] = b"    ";

/// How the document is laid out on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Four-space indentation, one value per line.
    #[default]
    Pretty,
    /// No whitespace.
    Compact,
}

/// One word in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub archaic: Vec<usize>,
    pub id: String,
    pub neighbor: Vec<usize>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl DocumentEntry {
    fn real(entry: &Entry) -> Self {
        DocumentEntry {
            archaic: entry.archaic_links().to_vec(),
            id: entry.id().to_string(),
            neighbor: entry.neighbors().to_vec(),
            kind: EntryKind::RealWord,
        }
    }

    fn archaic(entry: &Entry, id_offset: usize) -> Self {
        DocumentEntry {
            archaic: entry.neighbors().to_vec(),
            id: (id_offset + entry.id()).to_string(),
            neighbor: entry.real_links().to_vec(),
            kind: EntryKind::Archaic,
        }
    }
}

/// The serialized form of a [`Graph`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryDocument {
    pub archaic: BTreeMap<String, DocumentEntry>,
    pub real: BTreeMap<String, DocumentEntry>,
}

impl DictionaryDocument {
    /// Project a finished graph onto the document layout.
    pub fn from_graph(graph: &Graph) -> Self {
        let id_offset = graph.real().len();

        DictionaryDocument {
            archaic: collect_section(graph.archaic(), |entry| {
                DocumentEntry::archaic(entry, id_offset)
            }),
            real: collect_section(graph.real(), DocumentEntry::real),
        }
    }

    /// Number of distinct words across both sections.
    pub fn len(&self) -> usize {
        self.real.len() + self.archaic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.real.is_empty() && self.archaic.is_empty()
    }

    /// Serialize to a string.
    pub fn to_json_string(&self, style: JsonStyle) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_json(&mut buffer, style)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Serialize to a writer, followed by a newline.
    pub fn write_json<W: Write>(&self, mut writer: W, style: JsonStyle) -> Result<()> {
        match style {
            JsonStyle::Pretty => {
                let formatter = PrettyFormatter::with_indent(INDENT);
                let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
                self.serialize(&mut serializer)?;
            }
            JsonStyle::Compact => serde_json::to_writer(&mut writer, self)?,
        }
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write the document to `path`.
    ///
    /// The document goes to a temporary file in the target directory first
    /// and is renamed over `path` once complete, so a failed write leaves no
    /// partial output behind.
    pub fn save<P: AsRef<Path>>(&self, path: P, style: JsonStyle) -> Result<()> {
        let path = path.as_ref();
        let parent_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            self.write_json(&mut writer, style)?;
            writer.flush()?;
        }
        temp_file.persist(path).map_err(|e| e.error)?;

        debug!("wrote {} entries to {}", self.len(), path.display());
        Ok(())
    }

    /// Read a document written by [`DictionaryDocument::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let document = serde_json::from_reader(BufReader::new(file))?;
        Ok(document)
    }
}

fn collect_section<F>(collection: &Collection, project: F) -> BTreeMap<String, DocumentEntry>
where
    F: Fn(&Entry) -> DocumentEntry,
{
    let mut section = BTreeMap::new();
    let mut collapsed = 0;

    for entry in collection {
        if section
            .insert(entry.word().to_string(), project(entry))
            .is_some()
        {
            collapsed += 1;
        }
    }

    if collapsed > 0 {
        warn!(
            "{collapsed} duplicate {} words collapsed into existing keys",
            collection.kind()
        );
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::builder::DictionaryBuilder;
    use crate::dictionary::config::BuilderConfig;

    fn build(real: &[&str], archaic: Option<&[&str]>) -> Graph {
        let to_owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        DictionaryBuilder::new(BuilderConfig::new(1))
            .unwrap()
            .build(to_owned(real), archaic.map(to_owned))
            .graph
    }

    #[test]
    fn test_real_entries() {
        let document = DictionaryDocument::from_graph(&build(&["cat", "bat"], None));

        let cat = &document.real["cat"];
        assert_eq!(cat.id, "0");
        assert_eq!(cat.neighbor, vec![1]);
        assert!(cat.archaic.is_empty());
        assert_eq!(cat.kind, EntryKind::RealWord);
        assert_eq!(document.real["bat"].id, "1");
        assert!(document.archaic.is_empty());
    }

    #[test]
    fn test_archaic_ids_follow_real_words() {
        let document =
            DictionaryDocument::from_graph(&build(&["the", "dog"], Some(&["thee", "doge"][..])));

        assert_eq!(document.archaic["thee"].id, "2");
        assert_eq!(document.archaic["doge"].id, "3");
        assert_eq!(document.archaic["thee"].neighbor, vec![0]);
        assert_eq!(document.archaic["doge"].neighbor, vec![1]);
        assert_eq!(document.archaic["thee"].kind, EntryKind::Archaic);
        assert_eq!(document.real["the"].archaic, vec![0]);
        assert_eq!(document.real["dog"].archaic, vec![1]);
    }

    #[test]
    fn test_duplicate_word_keeps_later_entry() {
        let document = DictionaryDocument::from_graph(&build(&["cat", "bat", "cat"], None));

        assert_eq!(document.real.len(), 2);
        assert_eq!(document.real["cat"].id, "2");
    }

    #[test]
    fn test_pretty_layout() {
        let document = DictionaryDocument::from_graph(&build(&["cat"], None));
        let json = document.to_json_string(JsonStyle::Pretty).unwrap();

        let expected = "{\n    \"archaic\": {},\n    \"real\": {\n        \"cat\": {\n            \"archaic\": [],\n            \"id\": \"0\",\n            \"neighbor\": [],\n            \"type\": \"REAL_WORD\"\n        }\n    }\n}\n";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_compact_layout() {
        let document = DictionaryDocument::from_graph(&build(&["cat", "bat"], None));
        let json = document.to_json_string(JsonStyle::Compact).unwrap();

        assert_eq!(
            json,
            "{\"archaic\":{},\"real\":{\"bat\":{\"archaic\":[],\"id\":\"1\",\"neighbor\":[0],\"type\":\"REAL_WORD\"},\"cat\":{\"archaic\":[],\"id\":\"0\",\"neighbor\":[1],\"type\":\"REAL_WORD\"}}}\n"
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dictionary.json");
        let document = DictionaryDocument::from_graph(&build(&["the"], Some(&["thee"][..])));

        document.save(&path, JsonStyle::Pretty).unwrap();
        let loaded = DictionaryDocument::load(&path).unwrap();

        assert_eq!(loaded, document);
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.json");
        fs::write(&path, "stale").unwrap();

        DictionaryDocument::default()
            .save(&path, JsonStyle::Compact)
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\"archaic\":{},\"real\":{}}\n"
        );
        // only the output file remains
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
