//! Content validation for ZIP archives of fixture files.
//!
//! `zipcheck-core` opens a ZIP archive, walks every entry in archive order,
//! classifies each entry by its file-name suffix and checks the content of
//! PDF, CSV and XLSX entries (and, on request, JSON entries) against the
//! expectations in a [`ValidationConfig`]. Entries of any other type are
//! skipped with a diagnostic.
//!
//! # Examples
//!
//! ```no_run
//! use zipcheck_core::DEFAULT_ARCHIVE_RESOURCE;
//! use zipcheck_core::DirResourceLoader;
//! use zipcheck_core::ValidationConfig;
//! use zipcheck_core::run_validation;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loader = DirResourceLoader::new("tests/fixtures");
//! let config = ValidationConfig::default();
//! let report = run_validation(&loader, DEFAULT_ARCHIVE_RESOURCE, &config)?;
//! println!("Checked {} entries", report.total_entries());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod config;
pub mod error;
pub mod formats;
pub mod report;
pub mod resource;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export main API types
pub use api::list_entries;
pub use api::run_validation;
pub use api::validate_archive;
pub use api::validate_entry;
pub use config::CheckPolicy;
pub use config::JsonExpectations;
pub use config::PdfExpectations;
pub use config::TableExpectations;
pub use config::ValidationConfig;
pub use error::Mismatch;
pub use error::Result;
pub use error::ValidationError;
pub use formats::CheckOutcome;
pub use formats::detect::FileKind;
pub use formats::detect::classify;
pub use report::EntryListing;
pub use report::EntryOutcome;
pub use report::EntryStatus;
pub use report::ValidationReport;
pub use resource::DEFAULT_ARCHIVE_RESOURCE;
pub use resource::DirResourceLoader;
pub use resource::MemoryResourceLoader;
pub use resource::ResourceLoader;
