//! The similarity graph: two collections of entries and the edges between them.

use ahash::AHashMap;

use crate::dictionary::entry::{Entry, EntryKind};

/// Entries of one kind, addressed by load-order index.
///
/// Duplicate words keep separate entries; lookup by word text resolves to
/// the first occurrence.
#[derive(Debug, Clone)]
pub struct Collection {
    kind: EntryKind,
    entries: Vec<Entry>,
    first_index: AHashMap<String, usize>,
}

impl Collection {
    /// Create an empty collection.
    pub fn new(kind: EntryKind) -> Self {
        Collection {
            kind,
            entries: Vec::new(),
            first_index: AHashMap::new(),
        }
    }

    /// Build a collection from words in load order.
    pub fn from_words<I, S>(kind: EntryKind, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collection = Collection::new(kind);
        for word in words {
            collection.push(word);
        }
        collection
    }

    /// Append a word and return its index.
    pub fn push(&mut self, word: impl Into<String>) -> usize {
        let word = word.into();
        let index = self.entries.len();
        self.first_index.entry(word.clone()).or_insert(index);
        self.entries.push(Entry::new(word, index, self.kind));
        index
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Index of the first entry with the given text.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.first_index.get(word).copied()
    }

    /// First entry with the given text.
    pub fn by_word(&self, word: &str) -> Option<&Entry> {
        self.index_of(word).and_then(|index| self.entries.get(index))
    }

    /// Number of entries whose text already appeared earlier.
    pub fn duplicate_count(&self) -> usize {
        self.entries.len() - self.first_index.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn entry_mut(&mut self, index: usize) -> &mut Entry {
        &mut self.entries[index]
    }

    /// Symmetric same-collection edge. Returns `true` if either side was new.
    pub(crate) fn link(&mut self, i: usize, k: usize) -> bool {
        let forward = self.entries[i].add_neighbor(k);
        let backward = self.entries[k].add_neighbor(i);
        forward || backward
    }

    /// Total number of stored neighbor references.
    pub fn neighbor_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.neighbors().len()).sum()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The complete dictionary graph.
#[derive(Debug, Clone)]
pub struct Graph {
    real: Collection,
    archaic: Collection,
}

impl Graph {
    /// A graph with empty real and archaic collections.
    pub fn new() -> Self {
        Graph {
            real: Collection::new(EntryKind::RealWord),
            archaic: Collection::new(EntryKind::Archaic),
        }
    }

    pub fn real(&self) -> &Collection {
        &self.real
    }

    pub fn archaic(&self) -> &Collection {
        &self.archaic
    }

    pub(crate) fn real_mut(&mut self) -> &mut Collection {
        &mut self.real
    }

    pub(crate) fn archaic_mut(&mut self) -> &mut Collection {
        &mut self.archaic
    }

    /// Symmetric real/real edge.
    pub(crate) fn link_real(&mut self, i: usize, k: usize) -> bool {
        self.real.link(i, k)
    }

    /// Symmetric archaic/archaic edge.
    pub(crate) fn link_archaic(&mut self, i: usize, k: usize) -> bool {
        self.archaic.link(i, k)
    }

    /// Archaic entry `archaic` matched real entry `real`.
    ///
    /// Recorded in two different fields: `real_links` on the archaic side
    /// and `archaic_links` on the real side.
    pub(crate) fn link_archaic_to_real(&mut self, archaic: usize, real: usize) -> bool {
        let forward = self.archaic.entry_mut(archaic).add_real_link(real);
        let backward = self.real.entry_mut(real).add_archaic_link(archaic);
        forward || backward
    }

    /// One-directional phonetic edge from real entry `from` to `to`.
    pub(crate) fn link_phonetic(&mut self, from: usize, to: usize) -> bool {
        self.real.entry_mut(from).add_neighbor(to)
    }

    /// Total number of archaic→real matches.
    pub fn archaic_link_count(&self) -> usize {
        self.archaic
            .iter()
            .map(|entry| entry.real_links().len())
            .sum()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_assigns_load_order_ids() {
        let collection = Collection::from_words(EntryKind::RealWord, ["cat", "bat", "cat"]);

        assert_eq!(collection.len(), 3);
        let ids: Vec<usize> = collection.iter().map(Entry::id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(collection.get(2).map(Entry::word), Some("cat"));
    }

    #[test]
    fn test_duplicates_resolve_to_first_occurrence() {
        let collection = Collection::from_words(EntryKind::RealWord, ["cat", "bat", "cat"]);

        assert_eq!(collection.index_of("cat"), Some(0));
        assert_eq!(collection.by_word("bat").map(Entry::id), Some(1));
        assert_eq!(collection.index_of("rat"), None);
        assert_eq!(collection.duplicate_count(), 1);
    }

    #[test]
    fn test_link_is_symmetric_and_idempotent() {
        let mut graph = Graph::new();
        for word in ["cat", "bat", "rat"] {
            graph.real_mut().push(word);
        }

        assert!(graph.link_real(0, 2));
        assert!(!graph.link_real(2, 0));
        assert_eq!(graph.real().get(0).unwrap().neighbors(), &[2]);
        assert_eq!(graph.real().get(2).unwrap().neighbors(), &[0]);
        assert_eq!(graph.real().neighbor_count(), 2);
    }

    #[test]
    fn test_self_link_is_stored_once() {
        let mut graph = Graph::new();
        graph.real_mut().push("cat");

        graph.link_real(0, 0);
        assert_eq!(graph.real().get(0).unwrap().neighbors(), &[0]);
    }

    #[test]
    fn test_archaic_to_real_uses_separate_fields() {
        let mut graph = Graph::new();
        graph.real_mut().push("the");
        graph.archaic_mut().push("thee");

        assert!(graph.link_archaic_to_real(0, 0));

        let real = graph.real().get(0).unwrap();
        let archaic = graph.archaic().get(0).unwrap();
        assert!(real.neighbors().is_empty());
        assert_eq!(real.archaic_links(), &[0]);
        assert_eq!(archaic.real_links(), &[0]);
        assert!(archaic.neighbors().is_empty());
        assert_eq!(graph.archaic_link_count(), 1);
    }

    #[test]
    fn test_phonetic_link_is_one_directional() {
        let mut graph = Graph::new();
        graph.real_mut().push("phone");
        graph.real_mut().push("fone");

        assert!(graph.link_phonetic(0, 1));
        assert_eq!(graph.real().get(0).unwrap().neighbors(), &[1]);
        assert!(graph.real().get(1).unwrap().neighbors().is_empty());
    }
}
