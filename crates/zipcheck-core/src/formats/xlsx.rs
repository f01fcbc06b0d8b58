//! XLSX header and row-count checks on the first worksheet.

use std::io::Cursor;

use calamine::Data;
use calamine::Range;
use calamine::Reader;
use calamine::Xlsx;
use calamine::open_workbook_from_rs;

use super::CheckOutcome;
use super::CheckResult;
use super::ParseFailure;
use crate::config::TableExpectations;
use crate::error::Mismatch;

/// Opens the workbook and checks cell A1 of the first sheet and the number of
/// populated rows after the header.
///
/// A1 must hold a string equal to the expected header; a number, a formula
/// result of another type or an empty cell is a mismatch. A row counts as
/// populated when at least one of its cells is not empty.
///
/// # Errors
///
/// Returns a parse failure if the bytes are not an XLSX workbook or the
/// workbook has no worksheet.
pub fn validate_xlsx(bytes: &[u8], expect: &TableExpectations) -> CheckResult {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    let sheet = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ParseFailure("workbook has no worksheets".to_string()))??;

    match sheet.get_value((0, 0)) {
        Some(Data::String(value)) if *value == expect.header => {}
        other => {
            return Ok(CheckOutcome::Mismatch(Mismatch::new(
                "XLSX first header",
                format!("{:?}", expect.header),
                describe_cell(other),
            )));
        }
    }

    let data_rows = physical_rows(&sheet).saturating_sub(1);
    if data_rows != expect.data_rows {
        return Ok(CheckOutcome::Mismatch(Mismatch::new(
            "XLSX data rows",
            expect.data_rows,
            data_rows,
        )));
    }

    Ok(CheckOutcome::Passed)
}

fn physical_rows(sheet: &Range<Data>) -> usize {
    sheet
        .rows()
        .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
        .count()
}

fn describe_cell(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => "empty cell".to_string(),
        Some(Data::String(value)) => format!("{value:?}"),
        Some(other) => format!("non-string cell {other}"),
    }
}
