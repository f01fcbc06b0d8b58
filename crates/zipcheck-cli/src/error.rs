//! Error conversion utilities for CLI.
//!
//! Converts zipcheck-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use zipcheck_core::ValidationError;

/// Converts `ValidationError` to user-friendly anyhow error with context
pub fn convert_validation_error(err: ValidationError, archive: &Path) -> anyhow::Error {
    match err {
        ValidationError::AssertionFailed { entry, mismatch } => {
            anyhow!(
                "Validation failed for '{}' in '{}'\n\
                 {mismatch}\n\
                 HINT: Use --header, --rows or --pdf-marker if the fixture layout changed on purpose.",
                entry,
                archive.display()
            )
        }
        ValidationError::Parse {
            entry,
            kind,
            reason,
        } => {
            anyhow!(
                "Entry '{}' in '{}' is not a readable {kind} file: {}\n\
                 HINT: The entry may be corrupted or saved in a different format than its name suggests.",
                entry,
                archive.display(),
                reason
            )
        }
        ValidationError::EntryTooLarge { entry, size, max } => {
            anyhow!(
                "Entry '{}' in '{}' is too large: {} bytes (limit {} bytes)\n\
                 HINT: Use --max-entry-size to raise the limit.",
                entry,
                archive.display(),
                size,
                max
            )
        }
        ValidationError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The archive may be corrupted or not a ZIP file.",
                archive.display(),
                reason
            )
        }
        ValidationError::ResourceNotFound { name } => {
            anyhow!("Archive resource '{name}' not found")
        }
        ValidationError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {}",
                archive.display(),
                io_err
            )
        }
    }
}

/// Adds context to a core result about archive operations
pub fn add_archive_context<T>(
    result: Result<T, ValidationError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_validation_error(e, archive))
}
