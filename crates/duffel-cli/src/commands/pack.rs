//! Pack command implementation.

use crate::cli::PackArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use duffel_core::PackConfig;
use duffel_core::pack_many;

pub fn execute(args: &PackArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let mut config = PackConfig::default();
    if let Some(comment) = &args.comment {
        config = config.with_comment(comment.clone());
    }
    if let Some(level) = args.level {
        config = config.with_compression_level(level);
    }

    let report = add_archive_context(
        pack_many(&args.sources, &args.output, &config),
        &args.output,
    )?;

    for warning in &report.warnings {
        formatter.format_warning(warning);
    }
    formatter.format_pack_result(&args.output, &report)?;

    Ok(())
}
