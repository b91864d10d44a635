//! Parsers for haplotype tables and allele rosters.
//!
//! This module provides parsers for the two input files of a run:
//!
//! - **Haplotype tables**: Tab-separated allele rows, one call symbol per
//!   position, optionally gzip-compressed
//! - **Allele rosters**: Plain lists of important allele ids, one per line
//!
//! ## Example
//!
//! ```rust,no_run
//! use snp_panel::parsing::roster::parse_roster_file;
//! use snp_panel::parsing::table::parse_table_file;
//! use std::path::Path;
//!
//! // Keep only rows for the gene of interest
//! let table = parse_table_file(Path::new("haplotypes.tsv.gz"), Some("B*")).unwrap();
//! let roster = parse_roster_file(Path::new("important.txt")).unwrap();
//! ```
//!
//! ## Table Cell Symbols
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | base or variant code | concrete call |
//! | `_`    | same as the reference allele |
//! | `*`    | untyped / no information |
//!
//! Blank lines and `#` comments are skipped in both formats, and a leading
//! header row in a table is detected by its first field (`allele`, `name`,
//! or `id`).

pub mod roster;
pub mod table;
