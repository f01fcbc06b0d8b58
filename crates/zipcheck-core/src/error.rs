//! Error types for archive validation.

use thiserror::Error;

use crate::formats::detect::FileKind;

/// Result type alias using `ValidationError`.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// A content check whose expectation was not met.
///
/// Validators describe failed checks with a `Mismatch`; whether it aborts the
/// run or is only reported depends on the [`CheckPolicy`] of the format.
///
/// [`CheckPolicy`]: crate::CheckPolicy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Human-readable name of the check.
    pub check: String,
    /// Expected value, rendered for display.
    pub expected: String,
    /// Value actually found, rendered for display.
    pub actual: String,
}

impl Mismatch {
    /// Creates a new mismatch description.
    pub fn new(
        check: impl Into<String>,
        expected: impl std::fmt::Display,
        actual: impl std::fmt::Display,
    ) -> Self {
        Self {
            check: check.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: expected {}, actual {}",
            self.check, self.expected, self.actual
        )
    }
}

/// Errors that can occur while validating an archive.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A named resource could not be found by the resource loader.
    #[error("resource not found: {name}")]
    ResourceNotFound {
        /// Logical name of the missing resource.
        name: String,
    },

    /// Archive is corrupted or cannot be read as ZIP.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// Entry is larger than the configured in-memory limit.
    #[error("entry {entry} is too large ({size} > {max} bytes)")]
    EntryTooLarge {
        /// Entry name.
        entry: String,
        /// Declared uncompressed size in bytes.
        size: u64,
        /// Configured maximum in bytes.
        max: u64,
    },

    /// Entry content could not be parsed as its declared format.
    #[error("failed to parse {kind} entry {entry}: {reason}")]
    Parse {
        /// Entry name.
        entry: String,
        /// Format the entry was classified as.
        kind: FileKind,
        /// Parser error message.
        reason: String,
    },

    /// A hard check failed.
    #[error("assertion failed for {entry}: {mismatch}")]
    AssertionFailed {
        /// Entry name.
        entry: String,
        /// The failed check.
        mismatch: Mismatch,
    },
}

impl ValidationError {
    /// Returns `true` if this error is a failed content assertion, as opposed
    /// to an I/O, archive or parse failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipcheck_core::Mismatch;
    /// use zipcheck_core::ValidationError;
    ///
    /// let err = ValidationError::AssertionFailed {
    ///     entry: "data.csv".into(),
    ///     mismatch: Mismatch::new("CSV data rows", 100, 99),
    /// };
    /// assert!(err.is_assertion_failure());
    ///
    /// let err = ValidationError::InvalidArchive("bad header".into());
    /// assert!(!err.is_assertion_failure());
    /// ```
    #[must_use]
    pub const fn is_assertion_failure(&self) -> bool {
        matches!(self, Self::AssertionFailed { .. })
    }

    /// Returns the name of the entry this error relates to, if any.
    #[must_use]
    pub fn entry(&self) -> Option<&str> {
        match self {
            Self::EntryTooLarge { entry, .. }
            | Self::Parse { entry, .. }
            | Self::AssertionFailed { entry, .. } => Some(entry),
            _ => None,
        }
    }

    /// Returns the failed check for assertion failures.
    #[must_use]
    pub const fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            Self::AssertionFailed { mismatch, .. } => Some(mismatch),
            _ => None,
        }
    }
}
