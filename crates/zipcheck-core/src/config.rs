//! Validation expectations and policies.

use serde::Deserialize;
use serde::Serialize;

/// What happens when a check does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckPolicy {
    /// The mismatch aborts the whole run.
    Hard,
    /// The mismatch is reported and the run continues.
    Soft,
}

/// Expectations for PDF entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfExpectations {
    /// Literal text the extracted page text must contain.
    pub marker: String,
    /// Policy applied when the marker is missing.
    pub policy: CheckPolicy,
}

impl Default for PdfExpectations {
    fn default() -> Self {
        Self {
            marker: "Column_1".to_string(),
            policy: CheckPolicy::Soft,
        }
    }
}

/// Expectations for tabular entries (CSV and XLSX).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableExpectations {
    /// Exact value of the first header cell.
    pub header: String,
    /// Number of rows after the header row.
    pub data_rows: usize,
    /// Policy applied when either check fails.
    pub policy: CheckPolicy,
}

impl Default for TableExpectations {
    fn default() -> Self {
        Self {
            header: "id".to_string(),
            data_rows: 100,
            policy: CheckPolicy::Hard,
        }
    }
}

/// Expectations for JSON library documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonExpectations {
    /// Route `.json` entries to the JSON validator. When `false`, JSON
    /// entries are skipped like any unknown type.
    pub dispatch: bool,
    /// Expected `libraryName` value.
    pub library_name: String,
    /// Expected length of the `books` array.
    pub book_count: usize,
    /// Title of the book that must be present.
    pub book_title: String,
    /// Author expected for that book.
    pub book_author: String,
    /// Policy applied when any check fails.
    pub policy: CheckPolicy,
}

impl Default for JsonExpectations {
    fn default() -> Self {
        Self {
            dispatch: false,
            library_name: "Центральная городская библиотека".to_string(),
            book_count: 3,
            book_title: "Мастер и Маргарита".to_string(),
            book_author: "Михаил Булгаков".to_string(),
            policy: CheckPolicy::Hard,
        }
    }
}

/// Configuration for an archive validation run.
///
/// # Examples
///
/// ```
/// use zipcheck_core::CheckPolicy;
/// use zipcheck_core::ValidationConfig;
///
/// // Defaults: soft PDF check, hard CSV/XLSX checks, JSON not routed
/// let config = ValidationConfig::default();
/// assert_eq!(config.pdf.policy, CheckPolicy::Soft);
///
/// // Expect a different amount of data
/// let mut custom = ValidationConfig::default();
/// custom.csv.data_rows = 250;
/// custom.xlsx.data_rows = 250;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Largest entry, in bytes, that is read into memory.
    pub max_entry_size: u64,
    /// PDF expectations.
    pub pdf: PdfExpectations,
    /// CSV expectations.
    pub csv: TableExpectations,
    /// XLSX expectations.
    pub xlsx: TableExpectations,
    /// JSON expectations.
    pub json: JsonExpectations,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_entry_size: Self::DEFAULT_MAX_ENTRY_SIZE,
            pdf: PdfExpectations::default(),
            csv: TableExpectations::default(),
            xlsx: TableExpectations::default(),
            json: JsonExpectations::default(),
        }
    }
}

impl ValidationConfig {
    /// Default limit for a single entry: 64 MB.
    pub const DEFAULT_MAX_ENTRY_SIZE: u64 = 64 * 1024 * 1024;

    /// Creates a configuration with every check hard and JSON routed.
    #[must_use]
    pub fn strict() -> Self {
        let mut config = Self::default();
        config.pdf.policy = CheckPolicy::Hard;
        config.json.dispatch = true;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policies() {
        let config = ValidationConfig::default();
        assert_eq!(config.pdf.policy, CheckPolicy::Soft);
        assert_eq!(config.csv.policy, CheckPolicy::Hard);
        assert_eq!(config.xlsx.policy, CheckPolicy::Hard);
        assert!(!config.json.dispatch);
        assert_eq!(config.max_entry_size, 64 * 1024 * 1024);
    }

    #[test]
    fn test_default_expectations() {
        let config = ValidationConfig::default();
        assert_eq!(config.pdf.marker, "Column_1");
        assert_eq!(config.csv.header, "id");
        assert_eq!(config.csv.data_rows, 100);
        assert_eq!(config.xlsx, config.csv);
        assert_eq!(config.json.book_count, 3);
    }

    #[test]
    fn test_strict_config() {
        let config = ValidationConfig::strict();
        assert_eq!(config.pdf.policy, CheckPolicy::Hard);
        assert!(config.json.dispatch);
        assert_eq!(config.max_entry_size, ValidationConfig::DEFAULT_MAX_ENTRY_SIZE);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_partial_config_from_json() {
        let config: ValidationConfig = serde_json::from_str(
            r#"{"csv": {"data_rows": 250}, "pdf": {"policy": "hard"}}"#,
        )
        .unwrap();
        assert_eq!(config.csv.data_rows, 250);
        assert_eq!(config.csv.header, "id");
        assert_eq!(config.pdf.policy, CheckPolicy::Hard);
        assert_eq!(config.pdf.marker, "Column_1");
        assert_eq!(config.xlsx.data_rows, 100);
    }
}
