//! Command implementation for the langdict CLI.

use std::time::Instant;

use log::info;

use crate::cli::args::LangDictArgs;
use crate::cli::output::{BuildSummary, output_result};
use crate::dictionary::builder::DictionaryBuilder;
use crate::dictionary::document::DictionaryDocument;
use crate::error::Result;

/// Execute a CLI invocation: read the word lists, build the graph and write
/// the dictionary.
pub fn execute_command(args: LangDictArgs) -> Result<()> {
    let builder = DictionaryBuilder::new(args.builder_config())?;

    if args.verbosity() > 1 {
        println!("Reading words from: {}", args.input.display());
        if let Some(archaic) = &args.archaic {
            println!("Reading archaic words from: {}", archaic.display());
        }
    }

    let output = builder.build_from_files(&args.input, args.archaic.as_ref())?;

    let start = Instant::now();
    let document = DictionaryDocument::from_graph(&output.graph);
    document.save(&args.output, args.json_style())?;
    let write_time = start.elapsed();
    info!(
        "wrote {} entries to {} in {:?}",
        document.len(),
        args.output.display(),
        write_time
    );

    output_result(
        "Dictionary written successfully",
        &BuildSummary::new(
            args.output.to_string_lossy().to_string(),
            &output.stats,
            document.len(),
            write_time,
        ),
        &args,
    )?;

    Ok(())
}
