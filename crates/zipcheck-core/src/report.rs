//! Validation run reporting.

use serde::Serialize;

use crate::error::Mismatch;
use crate::formats::detect::FileKind;

/// What happened to a single archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    /// Every check for the entry held.
    Passed,
    /// A soft check did not hold; the run continued.
    SoftMismatch(Mismatch),
    /// The entry has no validator and was not checked.
    Skipped,
}

/// Outcome for one archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    /// Entry name as stored in the archive.
    pub name: String,
    /// Classification derived from the name.
    pub kind: FileKind,
    /// Uncompressed size in bytes.
    pub size: u64,
    /// What happened to the entry.
    pub status: EntryStatus,
}

impl EntryOutcome {
    /// Returns a one-line diagnostic for this outcome.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        match &self.status {
            EntryStatus::Passed => format!("{}: {} checks passed", self.name, self.kind),
            EntryStatus::SoftMismatch(mismatch) => format!("{}: {mismatch}", self.name),
            EntryStatus::Skipped => format!("{}: unknown file type, skipped", self.name),
        }
    }
}

/// Report of a validation run that did not hard-fail.
///
/// Entries appear in archive order.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Per-entry outcomes.
    pub entries: Vec<EntryOutcome>,
}

impl ValidationReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one entry.
    pub fn record(&mut self, outcome: EntryOutcome) {
        self.entries.push(outcome);
    }

    /// Returns the number of entries seen.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of entries whose checks all held.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.count(|status| matches!(status, EntryStatus::Passed))
    }

    /// Returns the number of entries with a soft mismatch.
    #[must_use]
    pub fn soft_mismatches(&self) -> usize {
        self.count(|status| matches!(status, EntryStatus::SoftMismatch(_)))
    }

    /// Returns the number of skipped entries.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|status| matches!(status, EntryStatus::Skipped))
    }

    /// Returns whether any soft check failed.
    #[must_use]
    pub fn has_mismatches(&self) -> bool {
        self.soft_mismatches() > 0
    }

    /// Returns the outcome recorded for the named entry.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&EntryOutcome> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    fn count(&self, predicate: impl Fn(&EntryStatus) -> bool) -> usize {
        self.entries
            .iter()
            .filter(|entry| predicate(&entry.status))
            .count()
    }
}

/// Archive entry metadata, listed without validating content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryListing {
    /// Entry name as stored in the archive.
    pub name: String,
    /// Classification derived from the name.
    pub kind: FileKind,
    /// Uncompressed size in bytes.
    pub size: u64,
    /// Compressed size in bytes.
    pub compressed_size: u64,
    /// Whether the entry would be routed to a validator.
    pub checked: bool,
}
