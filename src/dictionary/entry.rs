//! Dictionary entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which input list an entry was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryKind {
    /// A word from the primary list.
    RealWord,
    /// A word from the optional archaic list.
    Archaic,
}

impl EntryKind {
    /// The label used in the output document.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::RealWord => "REAL_WORD",
            EntryKind::Archaic => "ARCHAIC",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One word of a collection together with its outgoing edges.
///
/// Edge lists keep discovery order and never contain the same index twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    word: String,
    id: usize,
    kind: EntryKind,
    /// Indices into the entry's own collection.
    neighbors: Vec<usize>,
    /// Indices into the archaic collection; real entries only.
    archaic_links: Vec<usize>,
    /// Indices into the real collection; archaic entries only.
    real_links: Vec<usize>,
}

impl Entry {
    /// Create an entry without edges.
    pub fn new(word: impl Into<String>, id: usize, kind: EntryKind) -> Self {
        Entry {
            word: word.into(),
            id,
            kind,
            neighbors: Vec::new(),
            archaic_links: Vec::new(),
            real_links: Vec::new(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Load-order position within the owning collection.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Same-collection neighbors in discovery order.
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// Archaic entries that matched this real entry.
    pub fn archaic_links(&self) -> &[usize] {
        &self.archaic_links
    }

    /// Real entries this archaic entry matched.
    pub fn real_links(&self) -> &[usize] {
        &self.real_links
    }

    pub fn has_neighbor(&self, index: usize) -> bool {
        self.neighbors.contains(&index)
    }

    /// Returns `true` if the edge was new.
    pub(crate) fn add_neighbor(&mut self, index: usize) -> bool {
        push_unique(&mut self.neighbors, index)
    }

    pub(crate) fn add_archaic_link(&mut self, index: usize) -> bool {
        debug_assert_eq!(self.kind, EntryKind::RealWord);
        push_unique(&mut self.archaic_links, index)
    }

    pub(crate) fn add_real_link(&mut self, index: usize) -> bool {
        debug_assert_eq!(self.kind, EntryKind::Archaic);
        push_unique(&mut self.real_links, index)
    }
}

fn push_unique(list: &mut Vec<usize>, index: usize) -> bool {
    if list.contains(&index) {
        false
    } else {
        list.push(index);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_has_no_edges() {
        let entry = Entry::new("cat", 3, EntryKind::RealWord);

        assert_eq!(entry.word(), "cat");
        assert_eq!(entry.id(), 3);
        assert_eq!(entry.kind(), EntryKind::RealWord);
        assert!(entry.neighbors().is_empty());
        assert!(entry.archaic_links().is_empty());
        assert!(entry.real_links().is_empty());
    }

    #[test]
    fn test_edges_keep_order_and_skip_duplicates() {
        let mut entry = Entry::new("cat", 0, EntryKind::RealWord);

        assert!(entry.add_neighbor(2));
        assert!(entry.add_neighbor(1));
        assert!(!entry.add_neighbor(2));
        assert_eq!(entry.neighbors(), &[2, 1]);
        assert!(entry.has_neighbor(1));
        assert!(!entry.has_neighbor(0));

        assert!(entry.add_archaic_link(0));
        assert!(!entry.add_archaic_link(0));
        assert_eq!(entry.archaic_links(), &[0]);
    }

    #[test]
    fn test_entry_kind_labels() {
        assert_eq!(EntryKind::RealWord.as_str(), "REAL_WORD");
        assert_eq!(EntryKind::Archaic.to_string(), "ARCHAIC");
        assert_eq!(
            serde_json::to_string(&EntryKind::RealWord).unwrap(),
            "\"REAL_WORD\""
        );
    }
}
