//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use duffel_core::PackReport;
use duffel_core::UnpackReport;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn headline(&self, plain: &str, styled: String) {
        if self.use_colors {
            let _ = self.term.write_line(&styled);
        } else {
            let _ = self.term.write_line(plain);
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_pack_result(&self, output_path: &Path, report: &PackReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.headline(
            &format!("Container created: {}", output_path.display()),
            format!(
                "{} Container created: {}",
                style("✓").green().bold(),
                output_path.display()
            ),
        );

        let _ = self
            .term
            .write_line(&format!("  Files packed: {}", report.files_added));
        let _ = self
            .term
            .write_line(&format!("  Empty directories: {}", report.markers_added));
        let _ = self.term.write_line(&format!(
            "  Payload size: {}",
            Self::format_size(report.bytes_written)
        ));

        if report.files_skipped > 0 {
            let _ = self
                .term
                .write_line(&format!("  Files skipped: {}", report.files_skipped));
        }

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", report.duration));
        }

        Ok(())
    }

    fn format_unpack_result(&self, report: &UnpackReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if report.completed {
            self.headline(
                "Extraction complete",
                format!("{} Extraction complete", style("✓").green().bold()),
            );
        } else {
            self.headline(
                "Extraction stopped early",
                format!("{} Extraction stopped early", style("!").yellow().bold()),
            );
        }

        let _ = self
            .term
            .write_line(&format!("  Files extracted: {}", report.files_extracted));
        let _ = self
            .term
            .write_line(&format!("  Directories: {}", report.dirs_created));

        if report.files_skipped > 0 {
            let _ = self
                .term
                .write_line(&format!("  Entries skipped: {}", report.files_skipped));
        }

        if self.verbose {
            for path in &report.paths {
                let _ = self.term.write_line(&format!("  {}", path.display()));
            }
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", report.duration));
        }

        Ok(())
    }

    fn format_entry_names(&self, names: &[String]) -> Result<()> {
        for name in names {
            let _ = self.term.write_line(name);
        }
        if !self.quiet {
            let _ = self.term.write_line(&format!("{} entries", names.len()));
        }
        Ok(())
    }

    fn format_entry_comments(&self, names: &[String], comments: &[Option<String>]) -> Result<()> {
        for (name, comment) in names.iter().zip(comments) {
            let line = match comment {
                Some(comment) => format!("{name}: {comment}"),
                None => format!("{name}: (no comment)"),
            };
            let _ = self.term.write_line(&line);
        }
        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("warning:").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("warning: {message}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(HumanFormatter::format_size(512), "512 B");
        assert_eq!(HumanFormatter::format_size(2048), "2.0 KB");
        assert_eq!(HumanFormatter::format_size(3 * 1024 * 1024), "3.0 MB");
        assert_eq!(
            HumanFormatter::format_size(5 * 1024 * 1024 * 1024),
            "5.0 GB"
        );
    }
}
