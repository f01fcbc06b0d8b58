//! JSON library document checks.

use serde_json::Value;

use super::CheckOutcome;
use super::CheckResult;
use crate::config::JsonExpectations;
use crate::error::Mismatch;

/// Parses a library document and checks its name, the size of its `books`
/// array and the author of every book with the expected title.
///
/// # Errors
///
/// Returns a parse failure if the bytes are not valid JSON.
pub fn validate_json(bytes: &[u8], expect: &JsonExpectations) -> CheckResult {
    let root: Value = serde_json::from_slice(bytes)?;
    Ok(check_library(&root, expect).into())
}

fn check_library(root: &Value, expect: &JsonExpectations) -> Option<Mismatch> {
    let library_name = root.get("libraryName").and_then(Value::as_str);
    if library_name != Some(expect.library_name.as_str()) {
        return Some(Mismatch::new(
            "JSON libraryName",
            format!("{:?}", expect.library_name),
            library_name.map_or_else(|| "missing".to_string(), |name| format!("{name:?}")),
        ));
    }

    let Some(books) = root.get("books").and_then(Value::as_array) else {
        return Some(Mismatch::new("JSON books", "an array", "not an array"));
    };

    if books.len() != expect.book_count {
        return Some(Mismatch::new(
            "JSON book count",
            expect.book_count,
            books.len(),
        ));
    }

    let mut matching = books
        .iter()
        .filter(|book| book.get("title").and_then(Value::as_str) == Some(expect.book_title.as_str()))
        .peekable();
    if matching.peek().is_none() {
        return Some(Mismatch::new(
            "JSON book title",
            format!("{:?}", expect.book_title),
            "not found",
        ));
    }

    // Every book with the expected title must carry the expected author.
    for book in matching {
        let author = book.get("author").and_then(Value::as_str);
        if author != Some(expect.book_author.as_str()) {
            return Some(Mismatch::new(
                "JSON book author",
                format!("{:?}", expect.book_author),
                author.map_or_else(|| "missing".to_string(), |name| format!("{name:?}")),
            ));
        }
    }

    None
}
