//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use duffel_core::PackReport;
use duffel_core::UnpackReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_pack_result(&self, output_path: &Path, report: &PackReport) -> Result<()> {
        #[derive(Serialize)]
        struct PackOutput {
            output_path: String,
            files_packed: usize,
            empty_directories: usize,
            files_skipped: usize,
            bytes_written: u64,
            duration_ms: u128,
            warnings: Vec<String>,
        }

        let data = PackOutput {
            output_path: output_path.display().to_string(),
            files_packed: report.files_added,
            empty_directories: report.markers_added,
            files_skipped: report.files_skipped,
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        };

        let output = JsonOutput::success("pack", data);
        Self::output(&output)
    }

    fn format_unpack_result(&self, report: &UnpackReport) -> Result<()> {
        #[derive(Serialize)]
        struct UnpackOutput {
            paths: Vec<String>,
            files_extracted: usize,
            directories_created: usize,
            entries_skipped: usize,
            completed: bool,
            duration_ms: u128,
            warnings: Vec<String>,
        }

        let data = UnpackOutput {
            paths: report
                .paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            files_extracted: report.files_extracted,
            directories_created: report.dirs_created,
            entries_skipped: report.files_skipped,
            completed: report.completed,
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        };

        let output = JsonOutput::success("unpack", data);
        Self::output(&output)
    }

    fn format_entry_names(&self, names: &[String]) -> Result<()> {
        #[derive(Serialize)]
        struct ListOutput<'a> {
            entries: &'a [String],
            count: usize,
        }

        let data = ListOutput {
            entries: names,
            count: names.len(),
        };

        let output = JsonOutput::success("list", data);
        Self::output(&output)
    }

    fn format_entry_comments(&self, names: &[String], comments: &[Option<String>]) -> Result<()> {
        #[derive(Serialize)]
        struct CommentEntry<'a> {
            name: &'a str,
            comment: Option<&'a str>,
        }

        #[derive(Serialize)]
        struct CommentsOutput<'a> {
            entries: Vec<CommentEntry<'a>>,
            count: usize,
        }

        let entries: Vec<_> = names
            .iter()
            .zip(comments)
            .map(|(name, comment)| CommentEntry {
                name,
                comment: comment.as_deref(),
            })
            .collect();

        let data = CommentsOutput {
            count: entries.len(),
            entries,
        };

        let output = JsonOutput::success("comments", data);
        Self::output(&output)
    }

    fn format_warning(&self, message: &str) {
        // Warnings ride inside the JSON payload; keep stdout parseable.
        let _ = writeln!(io::stderr(), "warning: {message}");
    }
}
