//! Entry classification by file-name suffix.

use serde::Serialize;

/// Content formats the validator knows how to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// PDF document (`.pdf`).
    Pdf,
    /// Comma-separated values (`.csv`).
    Csv,
    /// Office Open XML workbook (`.xlsx`).
    Xlsx,
    /// JSON document (`.json`).
    Json,
    /// Anything else, including directory entries.
    Unknown,
}

impl FileKind {
    /// Returns the file-name suffix for this kind, if any.
    #[must_use]
    pub const fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Pdf => Some(".pdf"),
            Self::Csv => Some(".csv"),
            Self::Xlsx => Some(".xlsx"),
            Self::Json => Some(".json"),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pdf => "PDF",
            Self::Csv => "CSV",
            Self::Xlsx => "XLSX",
            Self::Json => "JSON",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Classifies an archive entry by the suffix of its name.
///
/// Matching is exact and case-sensitive: `report.PDF` is `Unknown`.
///
/// # Examples
///
/// ```
/// use zipcheck_core::FileKind;
/// use zipcheck_core::classify;
///
/// assert_eq!(classify("data/sample.csv"), FileKind::Csv);
/// assert_eq!(classify("notes.txt"), FileKind::Unknown);
/// ```
#[must_use]
pub fn classify(name: &str) -> FileKind {
    [FileKind::Pdf, FileKind::Csv, FileKind::Xlsx, FileKind::Json]
        .into_iter()
        .find(|kind| kind.suffix().is_some_and(|suffix| name.ends_with(suffix)))
        .unwrap_or(FileKind::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_suffixes() {
        assert_eq!(classify("report.pdf"), FileKind::Pdf);
        assert_eq!(classify("data.csv"), FileKind::Csv);
        assert_eq!(classify("data.xlsx"), FileKind::Xlsx);
        assert_eq!(classify("library.json"), FileKind::Json);
    }

    #[test]
    fn test_classify_nested_paths() {
        assert_eq!(classify("files/nested/data.csv"), FileKind::Csv);
        assert_eq!(classify("a.b.c.xlsx"), FileKind::Xlsx);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify("notes.txt"), FileKind::Unknown);
        assert_eq!(classify("data.xls"), FileKind::Unknown);
        assert_eq!(classify("archive.csv.gz"), FileKind::Unknown);
        assert_eq!(classify("files/"), FileKind::Unknown);
        assert_eq!(classify(""), FileKind::Unknown);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(classify("REPORT.PDF"), FileKind::Unknown);
        assert_eq!(classify("Data.Csv"), FileKind::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(FileKind::Xlsx.to_string(), "XLSX");
        assert_eq!(FileKind::Unknown.to_string(), "unknown");
    }
}
