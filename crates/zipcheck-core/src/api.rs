//! High-level public API for archive validation.

use std::io::Cursor;

use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;

use crate::Result;
use crate::ValidationConfig;
use crate::ValidationError;
use crate::archive::FixtureArchive;
use crate::config::CheckPolicy;
use crate::formats::CheckOutcome;
use crate::formats::CheckResult;
use crate::formats::csv::validate_csv;
use crate::formats::detect::FileKind;
use crate::formats::detect::classify;
use crate::formats::json::validate_json;
use crate::formats::pdf::validate_pdf;
use crate::formats::xlsx::validate_xlsx;
use crate::report::EntryListing;
use crate::report::EntryOutcome;
use crate::report::EntryStatus;
use crate::report::ValidationReport;
use crate::resource::ResourceLoader;

/// Loads a named archive resource and validates every entry in it.
///
/// This is the main entry point: the archive is fetched through `loader`,
/// opened as ZIP and walked in archive order. Each entry is read into memory
/// and routed by suffix to its validator; entries without a validator are
/// skipped.
///
/// # Arguments
///
/// * `loader` - Source of the archive bytes
/// * `name` - Logical resource name, e.g. `files/random_test_data.zip`
/// * `config` - Expectations and policies for the run
///
/// # Errors
///
/// Returns an error, and stops at the entry that caused it, if:
/// - The resource does not exist
/// - The archive or an entry cannot be read
/// - An entry cannot be parsed as its format
/// - A hard check fails
///
/// Soft check failures and skipped entries are recorded in the report.
///
/// # Examples
///
/// ```no_run
/// use zipcheck_core::DirResourceLoader;
/// use zipcheck_core::ValidationConfig;
/// use zipcheck_core::run_validation;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let loader = DirResourceLoader::new("tests/fixtures");
/// let report = run_validation(&loader, "files/random_test_data.zip", &ValidationConfig::default())?;
/// for entry in &report.entries {
///     println!("{}", entry.diagnostic());
/// }
/// # Ok(())
/// # }
/// ```
pub fn run_validation<L: ResourceLoader + ?Sized>(
    loader: &L,
    name: &str,
    config: &ValidationConfig,
) -> Result<ValidationReport> {
    let bytes = loader.load(name)?;
    debug!(resource = name, size = bytes.len(), "loaded archive resource");
    validate_archive(&bytes, config)
}

/// Validates every entry of an in-memory ZIP archive.
///
/// # Errors
///
/// Same as [`run_validation`], minus resource lookup.
pub fn validate_archive(bytes: &[u8], config: &ValidationConfig) -> Result<ValidationReport> {
    let mut archive = FixtureArchive::open(Cursor::new(bytes))?;
    let mut report = ValidationReport::new();

    for index in 0..archive.len() {
        let entry = archive.read_entry(index, config.max_entry_size)?;
        debug!(entry = %entry.name, size = entry.size, "file in archive");

        let status = validate_entry(&entry.name, &entry.bytes, config)?;
        report.record(EntryOutcome {
            kind: routed_kind(&entry.name, config),
            name: entry.name,
            size: entry.size,
            status,
        });
    }

    info!(
        entries = report.total_entries(),
        passed = report.passed(),
        mismatches = report.soft_mismatches(),
        skipped = report.skipped(),
        "archive validation complete"
    );
    Ok(report)
}

/// Classifies one entry and runs its checks.
///
/// # Errors
///
/// Returns [`ValidationError::Parse`] if the content cannot be parsed and
/// [`ValidationError::AssertionFailed`] if a hard check fails.
///
/// # Examples
///
/// ```
/// use zipcheck_core::EntryStatus;
/// use zipcheck_core::ValidationConfig;
/// use zipcheck_core::validate_entry;
///
/// let config = ValidationConfig::default();
/// let status = validate_entry("notes.txt", b"hello", &config).unwrap();
/// assert_eq!(status, EntryStatus::Skipped);
/// ```
pub fn validate_entry(name: &str, bytes: &[u8], config: &ValidationConfig) -> Result<EntryStatus> {
    let kind = routed_kind(name, config);
    let (result, policy) = match kind {
        FileKind::Pdf => (validate_pdf(bytes, &config.pdf), config.pdf.policy),
        FileKind::Csv => (validate_csv(bytes, &config.csv), config.csv.policy),
        FileKind::Xlsx => (validate_xlsx(bytes, &config.xlsx), config.xlsx.policy),
        FileKind::Json => (validate_json(bytes, &config.json), config.json.policy),
        FileKind::Unknown => {
            warn!(entry = name, "unknown file type, skipping");
            return Ok(EntryStatus::Skipped);
        }
    };

    apply_policy(name, kind, result, policy)
}

/// Lists entries with their classification without checking content.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidArchive`] if the archive cannot be read.
pub fn list_entries(bytes: &[u8], config: &ValidationConfig) -> Result<Vec<EntryListing>> {
    let mut archive = FixtureArchive::open(Cursor::new(bytes))?;
    (0..archive.len())
        .map(|index| {
            let (name, size, compressed_size) = archive.entry_metadata(index)?;
            let kind = classify(&name);
            let checked = routed_kind(&name, config) != FileKind::Unknown;
            Ok(EntryListing {
                name,
                kind,
                size,
                compressed_size,
                checked,
            })
        })
        .collect()
}

/// Classification after applying the dispatch table: JSON entries count as
/// unknown unless JSON routing is enabled.
fn routed_kind(name: &str, config: &ValidationConfig) -> FileKind {
    match classify(name) {
        FileKind::Json if !config.json.dispatch => FileKind::Unknown,
        kind => kind,
    }
}

fn apply_policy(
    name: &str,
    kind: FileKind,
    result: CheckResult,
    policy: CheckPolicy,
) -> Result<EntryStatus> {
    let outcome = result.map_err(|failure| ValidationError::Parse {
        entry: name.to_string(),
        kind,
        reason: failure.0,
    })?;

    match (outcome, policy) {
        (CheckOutcome::Passed, _) => {
            info!(entry = name, %kind, "check passed");
            Ok(EntryStatus::Passed)
        }
        (CheckOutcome::Mismatch(mismatch), CheckPolicy::Soft) => {
            warn!(entry = name, %kind, %mismatch, "check did not hold");
            Ok(EntryStatus::SoftMismatch(mismatch))
        }
        (CheckOutcome::Mismatch(mismatch), CheckPolicy::Hard) => {
            error!(entry = name, %kind, %mismatch, "assertion failed");
            Err(ValidationError::AssertionFailed {
                entry: name.to_string(),
                mismatch,
            })
        }
    }
}
