//! Test utilities for building fixture archives in memory.
//!
//! This module provides reusable helpers for creating ZIP archives and the
//! CSV, XLSX, PDF and JSON documents they carry, so tests do not depend on
//! binary files checked into the repository.
//!
//! Compiled for this crate's own tests and, for other crates, behind the
//! `test-utils` feature.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::fmt::Write as _;
use std::io::Cursor;
use std::io::Write;

use lopdf::Document;
use lopdf::Object;
use lopdf::Stream;
use lopdf::content::Content;
use lopdf::content::Operation;
use lopdf::dictionary;

/// Creates an in-memory ZIP archive from a list of entries.
///
/// Each entry is a tuple of (name, content). Entries are stored uncompressed
/// in the given order.
///
/// # Examples
///
/// ```
/// use zipcheck_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(&[("notes.txt", &b"hello"[..]), ("data.csv", &b"id\n"[..])]);
/// ```
#[must_use]
pub fn create_test_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    use zip::write::SimpleFileOptions;
    use zip::write::ZipWriter;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored)
        .unix_permissions(0o644);

    for (name, data) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(data).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// Creates CSV text with the given header row followed by `data_rows` rows.
///
/// The first column of each data row is its 1-based index; the remaining
/// columns hold `<header>_<index>` values.
#[must_use]
pub fn create_test_csv(headers: &[&str], data_rows: usize) -> Vec<u8> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(headers).unwrap();
    for row in 1..=data_rows {
        writer.write_record(data_cells(headers, row)).unwrap();
    }
    writer.into_inner().unwrap()
}

/// Creates an XLSX workbook whose first sheet holds the given header row
/// followed by `data_rows` rows.
#[must_use]
pub fn create_test_xlsx(headers: &[&str], data_rows: usize) -> Vec<u8> {
    let mut builder = XlsxTestBuilder::new().string_row(headers);
    for row in 1..=data_rows {
        let cells = data_cells(headers, row);
        let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
        builder = builder.string_row(&cells);
    }
    builder.build()
}

fn data_cells(headers: &[&str], row: usize) -> Vec<String> {
    headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            if column == 0 {
                row.to_string()
            } else {
                format!("{header}_{row}")
            }
        })
        .collect()
}

enum Cell {
    Text(String),
    Number(f64),
}

/// Builder for minimal single-sheet XLSX workbooks.
///
/// Writes only the parts a reader needs: content types, package and
/// workbook relationships, the workbook and one worksheet with inline
/// strings.
///
/// # Examples
///
/// ```
/// use zipcheck_core::test_utils::XlsxTestBuilder;
///
/// let xlsx = XlsxTestBuilder::new()
///     .string_row(&["id", "name"])
///     .number_row(&[1.0])
///     .blank_row()
///     .build();
/// ```
#[derive(Default)]
pub struct XlsxTestBuilder {
    rows: Vec<Vec<Cell>>,
}

impl XlsxTestBuilder {
    /// Creates an empty workbook builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row of string cells.
    #[must_use]
    pub fn string_row(mut self, cells: &[&str]) -> Self {
        self.rows
            .push(cells.iter().map(|c| Cell::Text((*c).to_string())).collect());
        self
    }

    /// Appends a row of numeric cells.
    #[must_use]
    pub fn number_row(mut self, cells: &[f64]) -> Self {
        self.rows.push(cells.iter().copied().map(Cell::Number).collect());
        self
    }

    /// Appends a row without any cells.
    #[must_use]
    pub fn blank_row(mut self) -> Self {
        self.rows.push(Vec::new());
        self
    }

    /// Serializes the workbook.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        let sheet = self.sheet_xml();
        create_test_zip(&[
            ("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes()),
            ("_rels/.rels", PACKAGE_RELS_XML.as_bytes()),
            ("xl/workbook.xml", WORKBOOK_XML.as_bytes()),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS_XML.as_bytes()),
            ("xl/worksheets/sheet1.xml", sheet.as_bytes()),
        ])
    }

    fn sheet_xml(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\">\
             <sheetData>",
        );
        for (index, cells) in self.rows.iter().enumerate() {
            if cells.is_empty() {
                continue;
            }
            let row = index + 1;
            let _ = write!(xml, "<row r=\"{row}\">");
            for (column, cell) in cells.iter().enumerate() {
                let reference = format!("{}{row}", column_name(column));
                match cell {
                    Cell::Text(text) => {
                        let _ = write!(
                            xml,
                            "<c r=\"{reference}\" t=\"inlineStr\"><is><t>{}</t></is></c>",
                            escape_xml(text)
                        );
                    }
                    Cell::Number(value) => {
                        let _ = write!(xml, "<c r=\"{reference}\"><v>{value}</v></c>");
                    }
                }
            }
            xml.push_str("</row>");
        }
        xml.push_str("</sheetData></worksheet>");
        xml
    }
}

fn column_name(mut index: usize) -> String {
    let mut name = Vec::new();
    loop {
        #[allow(clippy::cast_possible_truncation)]
        name.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    name.reverse();
    String::from_utf8(name).unwrap()
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const CONTENT_TYPES_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
<Default Extension=\"xml\" ContentType=\"application/xml\"/>\
<Override PartName=\"/xl/workbook.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml\"/>\
<Override PartName=\"/xl/worksheets/sheet1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>\
</Types>";

const PACKAGE_RELS_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"xl/workbook.xml\"/>\
</Relationships>";

const WORKBOOK_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<workbook xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" \
xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\">\
<sheets><sheet name=\"Sheet1\" sheetId=\"1\" r:id=\"rId1\"/></sheets>\
</workbook>";

const WORKBOOK_RELS_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet\" Target=\"worksheets/sheet1.xml\"/>\
</Relationships>";

/// Creates a one-page PDF with one text line per entry of `lines`.
///
/// # Examples
///
/// ```
/// use zipcheck_core::test_utils::create_test_pdf;
///
/// let pdf = create_test_pdf(&["Column_1 Column_2"]);
/// assert!(pdf.starts_with(b"%PDF"));
/// ```
#[must_use]
pub fn create_test_pdf(lines: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut operations = Vec::new();
    let mut y = 760;
    for line in lines {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
        operations.push(Operation::new("Td", vec![72.into(), y.into()]));
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("ET", vec![]));
        y -= 16;
    }
    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).unwrap();
    out
}

/// Creates the library JSON document the default expectations accept.
#[must_use]
pub fn create_test_library_json() -> Vec<u8> {
    let library = serde_json::json!({
        "libraryName": "Центральная городская библиотека",
        "books": [
            {"title": "Мастер и Маргарита", "author": "Михаил Булгаков"},
            {"title": "Преступление и наказание", "author": "Фёдор Достоевский"},
            {"title": "Евгений Онегин", "author": "Александр Пушкин"}
        ]
    });
    serde_json::to_vec_pretty(&library).unwrap()
}

/// Creates an archive that satisfies the default configuration: a CSV and an
/// XLSX file with an `id` column and 100 data rows, a PDF containing
/// `Column_1`, and a text file that is skipped.
#[must_use]
pub fn create_fixture_archive() -> Vec<u8> {
    let headers = ["id", "name", "email"];
    let csv = create_test_csv(&headers, 100);
    let xlsx = create_test_xlsx(&headers, 100);
    let pdf = create_test_pdf(&["Column_1 Column_2 Column_3", "1 name_1 email_1"]);

    create_test_zip(&[
        ("random_data.csv", csv.as_slice()),
        ("random_data.xlsx", xlsx.as_slice()),
        ("random_data.pdf", pdf.as_slice()),
        ("readme.txt", &b"Random test data"[..]),
    ])
}
