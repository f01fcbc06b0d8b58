//! Integration tests for archive validation.
//!
//! The first test runs the validator over the packaged fixture archive; the
//! rest cover end-to-end scenarios with archives built in memory.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;

use zipcheck_core::DEFAULT_ARCHIVE_RESOURCE;
use zipcheck_core::DirResourceLoader;
use zipcheck_core::EntryStatus;
use zipcheck_core::FileKind;
use zipcheck_core::MemoryResourceLoader;
use zipcheck_core::ValidationConfig;
use zipcheck_core::ValidationError;
use zipcheck_core::run_validation;
use zipcheck_core::test_utils::create_test_csv;
use zipcheck_core::test_utils::create_test_pdf;
use zipcheck_core::test_utils::create_test_xlsx;
use zipcheck_core::test_utils::create_test_zip;
use zipcheck_core::validate_archive;

fn fixtures() -> DirResourceLoader {
    DirResourceLoader::new(
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures"),
    )
}

fn in_memory(zip: Vec<u8>) -> MemoryResourceLoader {
    MemoryResourceLoader::new().with(DEFAULT_ARCHIVE_RESOURCE, zip)
}

#[test]
fn test_zip_parsing() {
    let report = run_validation(&fixtures(), DEFAULT_ARCHIVE_RESOURCE, &ValidationConfig::default())
        .expect("fixture archive should validate");

    for entry in &report.entries {
        println!("{}", entry.diagnostic());
    }

    assert_eq!(report.total_entries(), 4);
    for kind in [FileKind::Csv, FileKind::Xlsx, FileKind::Pdf] {
        let entry = report
            .entries
            .iter()
            .find(|entry| entry.kind == kind)
            .unwrap_or_else(|| panic!("fixture has no {kind} entry"));
        assert_eq!(entry.status, EntryStatus::Passed, "{}", entry.diagnostic());
    }
    assert_eq!(report.entry("readme.txt").unwrap().status, EntryStatus::Skipped);
}

#[test]
fn test_missing_fixture_resource() {
    let err = run_validation(&fixtures(), "files/absent.zip", &ValidationConfig::default())
        .unwrap_err();
    assert!(matches!(err, ValidationError::ResourceNotFound { ref name } if name == "files/absent.zip"));
}

#[test]
fn test_csv_with_100_rows_passes() {
    let csv = create_test_csv(&["id", "name"], 100);
    let loader = in_memory(create_test_zip(&[("data.csv", csv.as_slice())]));

    let report =
        run_validation(&loader, DEFAULT_ARCHIVE_RESOURCE, &ValidationConfig::default()).unwrap();
    assert_eq!(report.entry("data.csv").unwrap().status, EntryStatus::Passed);
}

#[test]
fn test_csv_with_99_rows_fails() {
    let csv = create_test_csv(&["id", "name"], 99);
    let loader = in_memory(create_test_zip(&[("data.csv", csv.as_slice())]));

    let err = run_validation(&loader, DEFAULT_ARCHIVE_RESOURCE, &ValidationConfig::default())
        .unwrap_err();
    assert!(err.is_assertion_failure());

    let mismatch = err.mismatch().unwrap();
    assert_eq!(mismatch.expected, "100");
    assert_eq!(mismatch.actual, "99");
    assert!(err.to_string().contains("expected 100, actual 99"));
}

#[test]
fn test_pdf_without_marker_does_not_fail_run() {
    let pdf = create_test_pdf(&["Annual summary", "No tabular data"]);
    let csv = create_test_csv(&["id", "name"], 100);
    let loader = in_memory(create_test_zip(&[
        ("report.pdf", pdf.as_slice()),
        ("data.csv", csv.as_slice()),
    ]));

    let report =
        run_validation(&loader, DEFAULT_ARCHIVE_RESOURCE, &ValidationConfig::default()).unwrap();

    // The entry after the PDF was still validated.
    assert_eq!(report.total_entries(), 2);
    assert!(report.has_mismatches());
    let pdf_entry = report.entry("report.pdf").unwrap();
    assert!(matches!(pdf_entry.status, EntryStatus::SoftMismatch(_)));
    assert!(pdf_entry.diagnostic().contains("Column_1"));
}

#[test]
fn test_unknown_entry_is_skipped() {
    let loader = in_memory(create_test_zip(&[("notes.txt", &b"remember the milk"[..])]));

    let report =
        run_validation(&loader, DEFAULT_ARCHIVE_RESOURCE, &ValidationConfig::default()).unwrap();
    assert_eq!(report.total_entries(), 1);
    assert_eq!(report.skipped(), 1);
    assert_eq!(report.entry("notes.txt").unwrap().kind, FileKind::Unknown);
}

#[test]
fn test_xlsx_wrong_row_count_fails() {
    let xlsx = create_test_xlsx(&["id", "name"], 101);
    let zip = create_test_zip(&[("data.xlsx", xlsx.as_slice())]);

    let err = validate_archive(&zip, &ValidationConfig::default()).unwrap_err();
    let mismatch = err.mismatch().unwrap();
    assert_eq!(mismatch.check, "XLSX data rows");
    assert_eq!(mismatch.actual, "101");
}

#[test]
fn test_malformed_entry_aborts_run() {
    let zip = create_test_zip(&[
        ("broken.pdf", &b"%PDF-1.4 truncated"[..]),
        ("notes.txt", &b"never reached"[..]),
    ]);

    let err = validate_archive(&zip, &ValidationConfig::default()).unwrap_err();
    assert!(matches!(err, ValidationError::Parse { kind: FileKind::Pdf, .. }));
}

#[test]
fn test_directory_entries_are_skipped() {
    let csv = create_test_csv(&["id"], 100);
    let zip = create_test_zip(&[("nested/", &b""[..]), ("nested/data.csv", csv.as_slice())]);

    let report = validate_archive(&zip, &ValidationConfig::default()).unwrap();
    assert_eq!(report.skipped(), 1);
    assert_eq!(report.passed(), 1);
}

#[test]
fn test_custom_expectations() {
    let csv = create_test_csv(&["key", "value"], 3);
    let zip = create_test_zip(&[("small.csv", csv.as_slice())]);

    let mut config = ValidationConfig::default();
    config.csv.header = "key".into();
    config.csv.data_rows = 3;

    let report = validate_archive(&zip, &config).unwrap();
    assert_eq!(report.passed(), 1);
}

#[test]
fn test_not_a_zip_archive() {
    let loader = in_memory(b"PK but not really".to_vec());
    let err = run_validation(&loader, DEFAULT_ARCHIVE_RESOURCE, &ValidationConfig::default())
        .unwrap_err();
    assert!(matches!(err, ValidationError::InvalidArchive(_)));
}
