//! Ambiguity classification and panel search.
//!
//! This module provides the disambiguation pipeline:
//!
//! - [`AmbiguityGroups`]: Exact-signature grouping of a whole table
//! - [`DiagnosticSet`]: Per-allele differences against the reference row
//! - [`PanelSearch`]: Brute-force search for a minimal discriminating column set
//! - [`AnalysisEngine`]: Orchestrates a full run into a [`PanelReport`]
//!
//! ## Pipeline
//!
//! A panel-design run proceeds in four steps:
//!
//! 1. **Classification**: group all table alleles by haplotype signature;
//!    roster alleles with shared signatures are set aside as ambiguous
//! 2. **Diffing**: compute each searched allele's diagnostic positions
//!    against the reference row
//! 3. **Pooling**: take the sorted union of diagnostic positions as the
//!    candidate column pool
//! 4. **Search**: walk subset sizes from largest to smallest, keeping the
//!    first (lexicographically earliest) passing candidate at the smallest
//!    passing size
//!
//! A candidate passes when the important alleles, projected onto its columns,
//! are pairwise distinct and distinct from every other table allele's
//! projection.
//!
//! ## Example
//!
//! ```rust
//! use snp_panel::{Allele, AlleleId, AnalysisEngine, HaplotypeTable};
//!
//! let table = HaplotypeTable::new(vec![
//!     Allele::from_symbols("B*07020101", &["A", "A", "A", "A"]),
//!     Allele::from_symbols("B*13090101", &["_", "_", "_", "G"]),
//!     Allele::from_symbols("B*44020101", &["_", "_", "G", "_"]),
//! ])
//! .unwrap();
//!
//! let roster = vec![AlleleId::new("B*13090101")];
//! let report = AnalysisEngine::new(&table).design(&roster);
//! assert_eq!(report.panel.columns, vec![3]);
//! ```

pub mod diff;
pub mod engine;
pub mod groups;
pub mod panel;
pub mod report;

pub use diff::DiagnosticSet;
pub use engine::AnalysisEngine;
pub use groups::AmbiguityGroups;
pub use panel::{PanelConfig, PanelSearch, PanelSolution, SearchMode};
pub use report::PanelReport;
