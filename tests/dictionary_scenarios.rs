use std::fs;
use std::path::Path;

use langdict::dictionary::{
    BuilderConfig, DictionaryBuilder, DictionaryDocument, EntryKind, JsonStyle,
};
use langdict::error::{LangDictError, Result};
use langdict::util::levenshtein::levenshtein_distance;

fn write_words(dir: &Path, name: &str, words: &[&str]) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut content = words.join("\n");
    content.push('\n');
    fs::write(&path, content).unwrap();
    path
}

fn build_document(
    real: &[&str],
    archaic: Option<&[&str]>,
    config: BuilderConfig,
) -> Result<DictionaryDocument> {
    let dir = tempfile::tempdir()?;
    let real_path = write_words(dir.path(), "real.txt", real);
    let archaic_path = archaic.map(|words| write_words(dir.path(), "archaic.txt", words));

    let output = DictionaryBuilder::new(config)?.build_from_files(real_path, archaic_path)?;
    Ok(DictionaryDocument::from_graph(&output.graph))
}

#[test]
fn fully_connected_triangle_at_distance_one() -> Result<()> {
    let document = build_document(&["cat", "bat", "rat"], None, BuilderConfig::new(1))?;

    assert_eq!(document.real["cat"].neighbor, vec![1, 2]);
    assert_eq!(document.real["bat"].neighbor, vec![0, 2]);
    assert_eq!(document.real["rat"].neighbor, vec![0, 1]);
    Ok(())
}

#[test]
fn archaic_word_links_back_to_real_word() -> Result<()> {
    let document = build_document(&["the"], Some(&["thee"][..]), BuilderConfig::new(1))?;

    let real = &document.real["the"];
    let archaic = &document.archaic["thee"];
    assert_eq!(real.archaic, vec![0]);
    assert_eq!(archaic.neighbor, vec![0]);
    assert_eq!(archaic.id, "1");
    assert_eq!(archaic.kind, EntryKind::Archaic);
    Ok(())
}

#[test]
fn zero_threshold_never_links_distinct_words() -> Result<()> {
    let words = ["cat", "bat", "a", "catalog"];
    let document = build_document(&words, None, BuilderConfig::new(0).with_phonetic(false))?;

    for (index, word) in words.iter().enumerate() {
        assert_eq!(document.real[*word].neighbor, vec![index]);
    }
    Ok(())
}

#[test]
fn phonetic_match_links_words_beyond_threshold() -> Result<()> {
    assert!(levenshtein_distance("phone", "fone") > 1);

    let document = build_document(&["phone", "fone", "cat"], None, BuilderConfig::new(1))?;
    assert_eq!(document.real["phone"].neighbor, vec![1]);
    assert_eq!(document.real["fone"].neighbor, vec![0]);
    assert!(document.real["cat"].neighbor.is_empty());

    let without = build_document(
        &["phone", "fone", "cat"],
        None,
        BuilderConfig::new(1).with_phonetic(false),
    )?;
    assert!(without.real["phone"].neighbor.is_empty());
    Ok(())
}

#[test]
fn real_neighbors_are_symmetric_without_phonetic_pass() -> Result<()> {
    let words = ["cart", "care", "core", "cure", "pure", "pore", "more", "mare"];
    let document = build_document(&words, None, BuilderConfig::new(1).with_phonetic(false))?;

    for (index, word) in words.iter().enumerate() {
        for &neighbor in &document.real[*word].neighbor {
            assert!(document.real[words[neighbor]].neighbor.contains(&index));
        }
    }
    Ok(())
}

#[test]
fn archaic_neighbors_are_symmetric() -> Result<()> {
    let archaic = ["thee", "thou", "thy", "thine", "hath", "doth", "dost", "art", "wert"];
    let document = build_document(
        &["the", "hat", "dot"],
        Some(&archaic[..]),
        BuilderConfig::new(2).with_phonetic(false),
    )?;

    let mut edges = 0;
    for (index, word) in archaic.iter().enumerate() {
        for &neighbor in &document.archaic[*word].archaic {
            assert!(
                document.archaic[archaic[neighbor]].archaic.contains(&index),
                "{word} -> {} has no reverse edge",
                archaic[neighbor]
            );
            edges += 1;
        }
    }
    assert!(edges > 0);
    assert_eq!(document.archaic["thee"].archaic, vec![1, 2, 3]);
    assert_eq!(document.archaic["thine"].archaic, vec![0]);
    Ok(())
}

#[test]
fn builds_are_deterministic() -> Result<()> {
    let real = ["cart", "care", "core", "cure", "kur", "pure", "fure", "phure"];
    let archaic = ["kure", "carre"];
    let dir = tempfile::tempdir()?;

    let mut outputs = Vec::new();
    for (name, config) in [
        ("first.json", BuilderConfig::new(1)),
        ("second.json", BuilderConfig::new(1)),
        ("parallel.json", BuilderConfig::new(1).with_threads(3)),
    ] {
        let document = build_document(&real, Some(&archaic[..]), config)?;
        let path = dir.path().join(name);
        document.save(&path, JsonStyle::Pretty)?;
        outputs.push(fs::read(&path)?);
    }

    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[0], outputs[2]);
    Ok(())
}

#[test]
fn missing_archaic_file_fails_before_building() {
    let dir = tempfile::tempdir().unwrap();
    let real_path = write_words(dir.path(), "real.txt", &["cat"]);
    let archaic_path = dir.path().join("missing.txt");

    let result = DictionaryBuilder::new(BuilderConfig::default())
        .unwrap()
        .build_from_files(real_path, Some(archaic_path.clone()));

    match result {
        Err(LangDictError::Input { path, .. }) => assert_eq!(path, archaic_path),
        other => panic!("expected input error, got {other:?}"),
    }
}
