//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use zipcheck_core::EntryListing;
use zipcheck_core::ValidationReport;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the report of a validation run that did not hard-fail
    fn format_validation_report(&self, report: &ValidationReport) -> Result<()>;

    /// Format a hard validation failure
    fn format_validation_failure(&self, error: &anyhow::Error) -> Result<()>;

    /// Format entry names only
    fn format_listing_short(&self, entries: &[EntryListing]) -> Result<()>;

    /// Format entries with type and size details
    fn format_listing_long(&self, entries: &[EntryListing], human_readable: bool) -> Result<()>;
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Warning,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn new(operation: impl Into<String>, status: Status, data: T) -> Self {
        Self {
            operation: operation.into(),
            status,
            data: Some(data),
            error: None,
        }
    }

    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self::new(operation, Status::Success, data)
    }

    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> JsonOutput<()> {
        JsonOutput {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
