//! # snp-panel
//!
//! A library for disambiguating gene alleles from SNP haplotype tables.
//!
//! Typing assays read a handful of genomic positions, not whole sequences.
//! Given a haplotype table (one row per allele, one column per position, the
//! reference allele first), two questions decide whether such an assay can
//! work: which alleles does the table confuse, and what is the smallest set
//! of positions that still tells the alleles you care about apart from
//! everything else?
//!
//! `snp-panel` answers both. It groups alleles by exact haplotype signature
//! to expose ambiguities, computes each important allele's diagnostic
//! positions against the reference, and brute-forces subsets of those
//! positions from largest to smallest to find a minimal discriminating
//! panel.
//!
//! ## Features
//!
//! - **Ambiguity detection**: Exact-signature grouping over the whole table
//! - **Reference diffing**: Per-allele diagnostic positions as `REF/ALT` pairs
//! - **Panel search**: Smallest column subset separating important alleles
//!   from each other and from every other allele
//! - **Conflict reporting**: Collisions that no column subset can resolve
//! - **Wildcard handling**: `_` (same as reference) and `*` (untyped) cells
//!
//! ## Example
//!
//! ```rust
//! use snp_panel::{Allele, AlleleId, AnalysisEngine, HaplotypeTable};
//!
//! // Reference first; '_' inherits the reference call, '*' is untyped
//! let table = HaplotypeTable::new(vec![
//!     Allele::from_symbols("B*07020101", &["A", "A", "A", "A"]),
//!     Allele::from_symbols("B*13090101", &["_", "G", "_", "G"]),
//!     Allele::from_symbols("B*44020101", &["_", "G", "C", "_"]),
//! ])
//! .unwrap();
//!
//! let roster = vec![AlleleId::new("B*13090101"), AlleleId::new("B*44020101")];
//! let report = AnalysisEngine::new(&table).design(&roster);
//!
//! // Position 1 alone cannot separate the pair; the search keeps {1, 2}
//! assert_eq!(report.panel.columns, vec![1, 2]);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Haplotype table, allele, and call types
//! - [`analysis`]: Ambiguity grouping, reference diffing, and the panel search
//! - [`parsing`]: Parsers for table and roster files
//! - [`cli`]: Command-line interface implementation

pub mod analysis;
pub mod cli;
pub mod core;
pub mod parsing;

// Re-export commonly used types for convenience
pub use analysis::engine::AnalysisEngine;
pub use analysis::groups::AmbiguityGroups;
pub use analysis::panel::{PanelConfig, PanelSearch, PanelSolution, SearchMode};
pub use analysis::report::PanelReport;
pub use core::allele::{Allele, Signature};
pub use core::call::Call;
pub use core::table::{HaplotypeTable, TableError};
pub use core::types::*;
