use std::path::Path;

use crate::core::types::AlleleId;
use crate::parsing::table::ParseError;

/// Parse an important-allele roster file: one allele id per line.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read. An empty roster is
/// not an error; the caller decides what an empty important set means.
pub fn parse_roster_file(path: &Path) -> Result<Vec<AlleleId>, ParseError> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_roster_text(&text))
}

/// Parse roster text, one allele id per line.
///
/// Blank lines and lines starting with `#` are skipped. Order is preserved
/// and repeated ids are kept; downstream analysis collapses duplicates.
#[must_use]
pub fn parse_roster_text(text: &str) -> Vec<AlleleId> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(AlleleId::new)
        .collect()
}
