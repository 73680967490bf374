//! Comments command implementation.

use crate::cli::CommentsArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use duffel_core::entry_comments;
use duffel_core::entry_names;

pub fn execute(args: &CommentsArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let names = add_archive_context(entry_names(&args.archive), &args.archive)?;
    let comments = add_archive_context(entry_comments(&args.archive), &args.archive)?;

    formatter.format_entry_comments(&names, &comments)?;

    Ok(())
}
