//! Unpack command implementation.

use crate::cli::UnpackArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use duffel_core::unpack_filtered;
use std::env;

pub fn execute(args: &UnpackArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let dest_dir = match &args.dest_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let report = add_archive_context(
        unpack_filtered(&args.archive, &dest_dir, args.keyword.as_deref()),
        &args.archive,
    )?;

    for warning in &report.warnings {
        formatter.format_warning(warning);
    }
    formatter.format_unpack_result(&report)?;

    Ok(())
}
