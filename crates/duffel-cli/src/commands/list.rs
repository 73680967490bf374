//! List command implementation.

use crate::cli::ListArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use duffel_core::entry_names;

pub fn execute(args: &ListArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let names = add_archive_context(entry_names(&args.archive), &args.archive)?;

    formatter.format_entry_names(&names)?;

    Ok(())
}
