//! CSV header and row-count checks.

use std::borrow::Cow;

use csv::ReaderBuilder;

use super::CheckOutcome;
use super::CheckResult;
use crate::config::TableExpectations;
use crate::error::Mismatch;

/// Parses the bytes as CSV and checks the first header cell and the number
/// of rows after the header.
///
/// Every record counts as a row, the first one included; records may have
/// differing lengths. A blank line outside a quoted field is a row holding
/// one empty cell. The header check runs first and its mismatch wins.
///
/// # Errors
///
/// Returns a parse failure if a record is not valid UTF-8 or the CSV is
/// malformed.
pub fn validate_csv(bytes: &[u8], expect: &TableExpectations) -> CheckResult {
    let bytes = mark_blank_lines(bytes);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(&*bytes);

    let mut first_cell: Option<String> = None;
    let mut rows = 0usize;
    for record in reader.records() {
        let record = record?;
        if rows == 0 {
            first_cell = Some(record.get(0).unwrap_or_default().to_string());
        }
        rows += 1;
    }

    let Some(first_cell) = first_cell else {
        return Ok(CheckOutcome::Mismatch(Mismatch::new(
            "CSV first header",
            format!("{:?}", expect.header),
            "no rows",
        )));
    };

    if first_cell != expect.header {
        return Ok(CheckOutcome::Mismatch(Mismatch::new(
            "CSV first header",
            format!("{:?}", expect.header),
            format!("{first_cell:?}"),
        )));
    }

    let data_rows = rows - 1;
    if data_rows != expect.data_rows {
        return Ok(CheckOutcome::Mismatch(Mismatch::new(
            "CSV data rows",
            expect.data_rows,
            data_rows,
        )));
    }

    Ok(CheckOutcome::Passed)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ScanState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Rewrites every blank line outside a quoted field as `""`, so the reader
/// yields a one-cell record for it instead of skipping it.
fn mark_blank_lines(bytes: &[u8]) -> Cow<'_, [u8]> {
    let mut rewritten: Option<Vec<u8>> = None;
    let mut state = ScanState::FieldStart;
    let mut at_line_start = true;

    for (index, &byte) in bytes.iter().enumerate() {
        let blank = at_line_start
            && (byte == b'\n' || (byte == b'\r' && bytes.get(index + 1) == Some(&b'\n')));
        if blank {
            rewritten
                .get_or_insert_with(|| bytes[..index].to_vec())
                .extend_from_slice(b"\"\"");
        }
        if let Some(out) = rewritten.as_mut() {
            out.push(byte);
        }

        state = match (state, byte) {
            (ScanState::Quoted, b'"') => ScanState::QuoteInQuoted,
            (ScanState::Quoted, _) => ScanState::Quoted,
            (ScanState::FieldStart | ScanState::QuoteInQuoted, b'"') => ScanState::Quoted,
            (_, b',' | b'\n') => ScanState::FieldStart,
            _ => ScanState::Unquoted,
        };
        at_line_start = byte == b'\n' && state == ScanState::FieldStart;
    }

    rewritten.map_or(Cow::Borrowed(bytes), Cow::Owned)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_csv;

    fn expect_mismatch(outcome: CheckOutcome) -> Mismatch {
        match outcome {
            CheckOutcome::Mismatch(mismatch) => mismatch,
            CheckOutcome::Passed => panic!("expected a mismatch"),
        }
    }

    #[test]
    fn test_valid_csv() {
        let csv = create_test_csv(&["id", "name"], 100);
        let outcome = validate_csv(&csv, &TableExpectations::default()).unwrap();
        assert!(outcome.is_passed());
    }

    #[test]
    fn test_too_few_rows() {
        let csv = create_test_csv(&["id", "name"], 99);
        let mismatch = expect_mismatch(validate_csv(&csv, &TableExpectations::default()).unwrap());
        assert_eq!(mismatch.check, "CSV data rows");
        assert_eq!(mismatch.expected, "100");
        assert_eq!(mismatch.actual, "99");
    }

    #[test]
    fn test_wrong_header() {
        let csv = create_test_csv(&["name", "id"], 100);
        let mismatch = expect_mismatch(validate_csv(&csv, &TableExpectations::default()).unwrap());
        assert_eq!(mismatch.check, "CSV first header");
        assert_eq!(mismatch.actual, "\"name\"");
    }

    #[test]
    fn test_header_checked_before_rows() {
        let csv = create_test_csv(&["key"], 3);
        let mismatch = expect_mismatch(validate_csv(&csv, &TableExpectations::default()).unwrap());
        assert_eq!(mismatch.check, "CSV first header");
    }

    #[test]
    fn test_empty_csv() {
        let mismatch = expect_mismatch(validate_csv(b"", &TableExpectations::default()).unwrap());
        assert_eq!(mismatch.actual, "no rows");
    }

    #[test]
    fn test_ragged_rows_are_counted() {
        let csv = b"id,name\n1\n2,beta,extra\n";
        let expect = TableExpectations {
            data_rows: 2,
            ..Default::default()
        };
        assert!(validate_csv(csv, &expect).unwrap().is_passed());
    }

    #[test]
    fn test_quoted_fields() {
        let csv = b"\"id\",\"name\"\n1,\"Smith, John\"\n";
        let expect = TableExpectations {
            data_rows: 1,
            ..Default::default()
        };
        assert!(validate_csv(csv, &expect).unwrap().is_passed());
    }

    #[test]
    fn test_blank_line_counts_as_row() {
        let expect = TableExpectations {
            data_rows: 3,
            ..Default::default()
        };
        let outcome = validate_csv(b"id,name\n1,a\n\n2,b\n", &expect).unwrap();
        assert!(outcome.is_passed(), "{outcome:?}");
    }

    #[test]
    fn test_blank_crlf_line_counts_as_row() {
        let expect = TableExpectations {
            data_rows: 3,
            ..Default::default()
        };
        let outcome = validate_csv(b"id\r\n1\r\n\r\n2\r\n", &expect).unwrap();
        assert!(outcome.is_passed(), "{outcome:?}");
    }

    #[test]
    fn test_blank_line_inside_quotes_is_not_a_row() {
        let expect = TableExpectations {
            data_rows: 1,
            ..Default::default()
        };
        let outcome = validate_csv(b"id,note\n1,\"first\n\nsecond\"\n", &expect).unwrap();
        assert!(outcome.is_passed(), "{outcome:?}");
    }

    #[test]
    fn test_leading_blank_line_is_first_row() {
        let mismatch = expect_mismatch(
            validate_csv(b"\nid,name\n1,a\n", &TableExpectations::default()).unwrap(),
        );
        assert_eq!(mismatch.check, "CSV first header");
        assert_eq!(mismatch.actual, "\"\"");
    }

    #[test]
    fn test_mark_blank_lines() {
        assert_eq!(&*mark_blank_lines(b"a\n\nb\n"), b"a\n\"\"\nb\n");
        assert_eq!(&*mark_blank_lines(b"a\r\n\r\n"), b"a\r\n\"\"\r\n");
        assert!(matches!(mark_blank_lines(b"a,b\n1,2\n"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_invalid_utf8() {
        let csv = b"id,name\n1,\xff\xfe\n";
        assert!(validate_csv(csv, &TableExpectations::default()).is_err());
    }
}
