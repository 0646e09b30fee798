use std::fs;

use clap::Parser;
use langdict::cli::{LangDictArgs, execute_command};
use langdict::dictionary::DictionaryDocument;
use langdict::error::Result;

#[test]
fn cli_writes_real_and_archaic_sections() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("words.txt");
    let archaic = dir.path().join("archaic.txt");
    let output = dir.path().join("out").join("dictionary.json");
    fs::write(&input, "the\ndog\nfog\n")?;
    fs::write(&archaic, "thee\ndoge\n")?;

    let args = LangDictArgs::try_parse_from([
        "langdict",
        "--quiet",
        "-i",
        input.to_str().unwrap(),
        "-a",
        archaic.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-l",
        "1",
    ])
    .unwrap();
    execute_command(args)?;

    let document = DictionaryDocument::load(&output)?;
    assert_eq!(document.real.len(), 3);
    assert_eq!(document.archaic.len(), 2);
    assert_eq!(document.real["dog"].neighbor, vec![2]);
    assert_eq!(document.real["the"].archaic, vec![0]);
    assert_eq!(document.archaic["thee"].id, "3");
    assert_eq!(document.archaic["doge"].neighbor, vec![1]);

    let text = fs::read_to_string(&output)?;
    assert!(text.starts_with("{\n    \"archaic\": {"));
    Ok(())
}

#[test]
fn cli_compact_output() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("words.txt");
    let output = dir.path().join("dictionary.json");
    fs::write(&input, "cat\n")?;

    let args = LangDictArgs::try_parse_from([
        "langdict",
        "-q",
        "--compact",
        "--no-phonetic",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ])
    .unwrap();
    execute_command(args)?;

    assert_eq!(
        fs::read_to_string(&output)?,
        "{\"archaic\":{},\"real\":{\"cat\":{\"archaic\":[],\"id\":\"0\",\"neighbor\":[],\"type\":\"REAL_WORD\"}}}\n"
    );
    Ok(())
}
