//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use super::formatter::Status;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use zipcheck_core::EntryListing;
use zipcheck_core::EntryOutcome;
use zipcheck_core::EntryStatus;
use zipcheck_core::FileKind;
use zipcheck_core::ValidationReport;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct EntryOutput<'a> {
    name: &'a str,
    kind: FileKind,
    size: u64,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    check: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual: Option<&'a str>,
}

impl<'a> From<&'a EntryOutcome> for EntryOutput<'a> {
    fn from(entry: &'a EntryOutcome) -> Self {
        let (status, mismatch) = match &entry.status {
            EntryStatus::Passed => ("passed", None),
            EntryStatus::SoftMismatch(mismatch) => ("mismatch", Some(mismatch)),
            EntryStatus::Skipped => ("skipped", None),
        };
        Self {
            name: &entry.name,
            kind: entry.kind,
            size: entry.size,
            status,
            check: mismatch.map(|m| m.check.as_str()),
            expected: mismatch.map(|m| m.expected.as_str()),
            actual: mismatch.map(|m| m.actual.as_str()),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_validation_report(&self, report: &ValidationReport) -> Result<()> {
        #[derive(Serialize)]
        struct ValidationOutput<'a> {
            total_entries: usize,
            passed: usize,
            mismatches: usize,
            skipped: usize,
            entries: Vec<EntryOutput<'a>>,
        }

        let data = ValidationOutput {
            total_entries: report.total_entries(),
            passed: report.passed(),
            mismatches: report.soft_mismatches(),
            skipped: report.skipped(),
            entries: report.entries.iter().map(EntryOutput::from).collect(),
        };

        let status = if report.has_mismatches() {
            Status::Warning
        } else {
            Status::Success
        };
        Self::output(&JsonOutput::new("validate", status, data))
    }

    fn format_validation_failure(&self, error: &anyhow::Error) -> Result<()> {
        let output = JsonOutput::<()>::error("validate", format!("{error:#}"));
        Self::output(&output)
    }

    fn format_listing_short(&self, entries: &[EntryListing]) -> Result<()> {
        #[derive(Serialize)]
        struct ListingOutput<'a> {
            total_entries: usize,
            entries: Vec<&'a str>,
        }

        let data = ListingOutput {
            total_entries: entries.len(),
            entries: entries.iter().map(|entry| entry.name.as_str()).collect(),
        };
        Self::output(&JsonOutput::success("list", data))
    }

    fn format_listing_long(&self, entries: &[EntryListing], _human_readable: bool) -> Result<()> {
        #[derive(Serialize)]
        struct ListingOutput<'a> {
            total_entries: usize,
            total_size: u64,
            entries: &'a [EntryListing],
        }

        let data = ListingOutput {
            total_entries: entries.len(),
            total_size: entries.iter().map(|entry| entry.size).sum(),
            entries,
        };
        Self::output(&JsonOutput::success("list", data))
    }
}
