//! Test-case discovery and header parsing.
//!
//! A test program is a `.java` file under `src/test/`; its first three lines
//! are a header carrying the description and the two expected verdicts, each
//! behind a two-character comment prefix (`// `). Everything past line three
//! is opaque to the harness.

use std::fs;
use std::path::{Path, PathBuf};

use crate::compile::java_sources;
use crate::error::HarnessError;

/// Directory holding the annotated test programs, relative to the harness
/// root.
pub const TEST_DIR: &str = "src/test";

/// One annotated test program, loaded from its source header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Unique id, the source filename with its extension stripped.
    pub id: String,
    /// Path of the test source file.
    pub source_path: PathBuf,
    /// Human description from header line one.
    pub description: String,
    /// Expected null-pointer verdict string from header line two.
    pub expected_np: String,
    /// Expected out-of-bounds verdict string from header line three.
    pub expected_oob: String,
}

impl TestCase {
    /// Whether this case survives the given allow-list.
    ///
    /// An empty allow-list admits everything; otherwise membership is exact
    /// and case-sensitive.
    pub fn is_allowed(id: &str, allow_list: &[String]) -> bool {
        allow_list.is_empty() || allow_list.iter().any(|a| a == id)
    }
}

/// Enumerate and load the test cases under `<root>/src/test`.
///
/// Results are sorted by id so report order is stable across filesystems.
/// Ids filtered out by a non-empty `allow_list` are skipped entirely, not
/// reported. Malformed headers never fail the load: missing lines simply
/// leave the corresponding fields empty.
///
/// # Errors
/// Returns [`HarnessError::SourceList`] if the test directory cannot be
/// enumerated or a retained file cannot be read.
pub fn load_test_cases(
    root: &Path,
    allow_list: &[String],
) -> Result<Vec<TestCase>, HarnessError> {
    let dir = root.join(TEST_DIR);
    let mut cases = Vec::new();
    for path in java_sources(&dir)? {
        let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if !TestCase::is_allowed(id, allow_list) {
            tracing::debug!(id, "skipped by allow-list");
            continue;
        }
        let bytes = fs::read(&path).map_err(|e| HarnessError::source_list(&path, e))?;
        let (description, expected_np, expected_oob) =
            parse_header(&String::from_utf8_lossy(&bytes));
        cases.push(TestCase {
            id: id.to_string(),
            source_path: path,
            description,
            expected_np,
            expected_oob,
        });
    }
    // java_sources already sorts by path, but ids are what the report keys on
    cases.sort_by(|a, b| a.id.cmp(&b.id));
    tracing::info!(count = cases.len(), "loaded test cases");
    Ok(cases)
}

/// Parse the 3-line header out of a test source.
///
/// Each line loses its first two characters (comment marker plus one space)
/// and is trimmed; absent lines become empty strings.
pub fn parse_header(text: &str) -> (String, String, String) {
    let mut lines = text.lines();
    let mut field = || strip_prefix_line(lines.next().unwrap_or(""));
    (field(), field(), field())
}

/// Drop the first two characters of a header line and trim the remainder.
fn strip_prefix_line(line: &str) -> String {
    let mut chars = line.chars();
    chars.next();
    chars.next();
    chars.as_str().trim().to_string()
}
