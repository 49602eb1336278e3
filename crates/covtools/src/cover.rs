//! The `reqcover` command: requirement coverage tally

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use covtools_core::{render_summary, SpecDocument};
use tracing::debug;

/// Tally test coverage over an annotated requirements document
#[derive(Debug, Parser)]
#[command(name = "reqcover")]
#[command(about = "Calculate test coverage from a textual requirements document")]
pub struct CoverArgs {
    /// Requirements text document to scan
    pub file: PathBuf,

    /// Presence of any second argument lists uncovered MUST paragraphs in full
    #[arg(value_name = "VERBOSE")]
    pub verbose: Option<String>,
}

/// Read the document and write the SHOULD block followed by the MUST block.
///
/// The verbose todo listing applies to the MUST block only. A missing or
/// unreadable file is propagated untranslated.
pub fn run(args: &CoverArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let content = fs::read_to_string(&args.file)?;
    let doc = SpecDocument::parse(&content);
    debug!(statements = doc.statements().len(), "parsed requirements document");

    let shoulds = doc.shoulds();
    out.write_all(render_summary("SHOULD", &shoulds, false).as_bytes())?;

    let musts = doc.musts();
    out.write_all(render_summary("MUST", &musts, args.verbose.is_some()).as_bytes())?;

    Ok(())
}
