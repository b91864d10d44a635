use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::core::allele::Allele;
use crate::core::call::Call;
use crate::core::table::{HaplotypeTable, TableError};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid haplotype table: {0}")]
    InvalidFormat(String),

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Check if the path is a gzipped file
fn is_gzipped(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".gz")
}

/// Read a text file, transparently decompressing `.gz` inputs
fn read_text(path: &Path) -> Result<String, std::io::Error> {
    if is_gzipped(path) {
        let file = std::fs::File::open(path)?;
        let mut decoder = GzDecoder::new(file);
        let mut text = String::new();
        decoder.read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Parse a haplotype table file: one tab-separated row per allele, the
/// allele id in the first column and one call symbol per position after it.
/// The first data row is the reference allele. Supports gzip-compressed
/// input via a `.gz` extension.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse
/// errors if the content is invalid.
pub fn parse_table_file(path: &Path, prefix: Option<&str>) -> Result<HaplotypeTable, ParseError> {
    let text = read_text(path)?;
    parse_table_text(&text, prefix)
}

/// Parse haplotype table text.
///
/// Blank lines and lines starting with `#` are skipped, and a leading header
/// row is detected by its first field. When `prefix` is given, only rows
/// whose allele id starts with it are kept; the first kept row becomes the
/// reference allele.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for rows with missing fields or an
/// inconsistent column count, or `ParseError::Table` when the assembled
/// table violates a structural rule (no rows, wildcards in the reference
/// row, duplicate ids).
pub fn parse_table_text(text: &str, prefix: Option<&str>) -> Result<HaplotypeTable, ParseError> {
    let mut alleles: Vec<Allele> = Vec::new();
    let mut expected_width: Option<usize> = None;
    let mut first_data_line = true;
    let mut filtered = 0usize;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();

        // Check if first non-empty/non-comment line is a header
        if first_data_line {
            first_data_line = false;
            let first = fields.first().map(|s| s.to_lowercase()).unwrap_or_default();
            if first == "allele" || first == "name" || first == "id" {
                continue;
            }
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        let id = fields[0].trim();
        if id.is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has an empty allele id"
            )));
        }

        if let Some(prefix) = prefix {
            if !id.starts_with(prefix) {
                filtered += 1;
                continue;
            }
        }

        if fields.len() < 2 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num}: allele '{id}' has no call columns"
            )));
        }

        let mut calls = Vec::with_capacity(fields.len() - 1);
        for (column, cell) in fields[1..].iter().enumerate() {
            let cell = cell.trim();
            if cell.is_empty() {
                return Err(ParseError::InvalidFormat(format!(
                    "Line {line_num}: allele '{id}' has an empty call at position {column}"
                )));
            }
            calls.push(Call::parse(cell));
        }

        match expected_width {
            Some(expected) if calls.len() != expected => {
                return Err(ParseError::InvalidFormat(format!(
                    "Line {line_num}: allele '{id}' has {} calls, expected {expected}",
                    calls.len()
                )));
            }
            Some(_) => {}
            None => expected_width = Some(calls.len()),
        }

        alleles.push(Allele::new(id, calls));
    }

    if let Some(prefix) = prefix {
        debug!(prefix, kept = alleles.len(), filtered, "applied allele prefix filter");
    }

    Ok(HaplotypeTable::new(alleles)?)
}
