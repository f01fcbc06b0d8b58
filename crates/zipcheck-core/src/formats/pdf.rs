//! PDF text check.

use lopdf::Document;

use super::CheckOutcome;
use super::CheckResult;
use crate::config::PdfExpectations;
use crate::error::Mismatch;

/// Extracts the text of every page and checks that it contains the marker.
///
/// # Errors
///
/// Returns a parse failure if the bytes are not a readable PDF document or
/// its page content cannot be decoded.
pub fn validate_pdf(bytes: &[u8], expect: &PdfExpectations) -> CheckResult {
    let text = extract_text(bytes)?;

    let outcome = if text.contains(&expect.marker) {
        CheckOutcome::Passed
    } else {
        CheckOutcome::Mismatch(Mismatch::new(
            "PDF text marker",
            format!("text containing {:?}", expect.marker),
            "marker not found",
        ))
    };
    Ok(outcome)
}

fn extract_text(bytes: &[u8]) -> Result<String, lopdf::Error> {
    let document = Document::load_mem(bytes)?;
    let pages: Vec<u32> = document.get_pages().keys().copied().collect();
    if pages.is_empty() {
        return Ok(String::new());
    }
    document.extract_text(&pages)
}
