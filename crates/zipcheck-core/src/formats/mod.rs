//! Format detection and per-format content checks.
//!
//! Every validator takes the raw bytes of one entry and returns a
//! [`CheckOutcome`]. Validators never decide whether a mismatch is fatal;
//! the dispatcher in [`crate::api`] applies the configured
//! [`CheckPolicy`](crate::CheckPolicy).

pub mod csv;
pub mod detect;
pub mod json;
pub mod pdf;
pub mod xlsx;

use crate::error::Mismatch;

/// Result of running the checks for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// All checks held.
    Passed,
    /// The first check that did not hold.
    Mismatch(Mismatch),
}

impl CheckOutcome {
    /// Returns `true` if all checks held.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

impl From<Option<Mismatch>> for CheckOutcome {
    fn from(mismatch: Option<Mismatch>) -> Self {
        mismatch.map_or(Self::Passed, Self::Mismatch)
    }
}

/// Parser failure reported by a validator, before the entry name is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure(pub String);

impl<E: std::error::Error> From<E> for ParseFailure {
    fn from(err: E) -> Self {
        Self(err.to_string())
    }
}

/// Result type returned by the format validators.
pub type CheckResult = std::result::Result<CheckOutcome, ParseFailure>;
