//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use zipcheck_core::EntryListing;
use zipcheck_core::EntryStatus;
use zipcheck_core::ValidationReport;

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

    /// Renders a byte count with a binary unit, one decimal above 1 KB.
    #[allow(clippy::cast_precision_loss)]
    fn format_size(bytes: u64) -> String {
        const UNITS: [&str; 3] = ["KB", "MB", "GB"];

        if bytes < 1024 {
            return format!("{bytes} B");
        }

        let mut value = bytes as f64 / 1024.0;
        let mut unit = 0;
        while value >= 1024.0 && unit + 1 < UNITS.len() {
            value /= 1024.0;
            unit += 1;
        }
        format!("{value:.1} {}", UNITS[unit])
    }

    /// Groups digits in threes: `1234567` becomes `1,234,567`.
    fn format_number(n: usize) -> String {
        let digits = n.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        grouped
    }

    fn status_marker(&self, status: &EntryStatus) -> String {
        match (status, self.use_colors) {
            (EntryStatus::Passed, true) => style("✓").green().bold().to_string(),
            (EntryStatus::SoftMismatch(_), true) => style("⚠").yellow().bold().to_string(),
            (EntryStatus::Skipped, true) => style("-").dim().to_string(),
            (EntryStatus::Passed, false) => "PASS".to_string(),
            (EntryStatus::SoftMismatch(_), false) => "WARN".to_string(),
            (EntryStatus::Skipped, false) => "SKIP".to_string(),
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_validation_report(&self, report: &ValidationReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for entry in &report.entries {
            let marker = self.status_marker(&entry.status);
            if self.verbose {
                let _ = self.term.write_line(&format!(
                    "{marker} {} ({})",
                    entry.diagnostic(),
                    Self::format_size(entry.size)
                ));
            } else {
                let _ = self
                    .term
                    .write_line(&format!("{marker} {}", entry.diagnostic()));
            }
        }

        let _ = self.term.write_line("");
        let headline = if report.has_mismatches() {
            "Validation passed with warnings"
        } else {
            "Validation passed"
        };
        if self.use_colors {
            let styled = if report.has_mismatches() {
                style(headline).yellow().bold()
            } else {
                style(headline).green().bold()
            };
            let _ = self.term.write_line(&styled.to_string());
        } else {
            let _ = self.term.write_line(headline);
        }

        let _ = self.term.write_line(&format!(
            "  Entries: {}",
            Self::format_number(report.total_entries())
        ));
        let _ = self.term.write_line(&format!(
            "  Passed: {}",
            Self::format_number(report.passed())
        ));
        let _ = self.term.write_line(&format!(
            "  Mismatches: {}",
            Self::format_number(report.soft_mismatches())
        ));
        let _ = self.term.write_line(&format!(
            "  Skipped: {}",
            Self::format_number(report.skipped())
        ));

        Ok(())
    }

    fn format_validation_failure(&self, _error: &anyhow::Error) -> Result<()> {
        // Always shown, even in quiet mode; the details go to stderr
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{}", style("Validation FAILED").red().bold()));
        } else {
            let _ = self.term.write_line("Validation FAILED");
        }
        Ok(())
    }

    fn format_listing_short(&self, entries: &[EntryListing]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for entry in entries {
            let _ = self.term.write_line(&entry.name);
        }

        Ok(())
    }

    fn format_listing_long(&self, entries: &[EntryListing], human_readable: bool) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for entry in entries {
            let size_str = if human_readable {
                Self::format_size(entry.size)
            } else {
                entry.size.to_string()
            };
            let checked = if entry.checked { "checked" } else { "skipped" };

            let _ = self.term.write_line(&format!(
                "{:<8} {:<8} {:>10}  {}",
                entry.kind.to_string(),
                checked,
                size_str,
                entry.name
            ));
        }

        let total_size: u64 = entries.iter().map(|entry| entry.size).sum();
        let _ = self.term.write_line("");
        let _ = self.term.write_line(&format!(
            "Total: {} entries, {}",
            Self::format_number(entries.len()),
            Self::format_size(total_size)
        ));

        Ok(())
    }
}
