use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::diff::DiagnosticSet;
use crate::analysis::panel::PanelSolution;
use crate::core::types::{AlleleId, Position};

/// A roster allele that cannot be searched because its signature is shared
#[derive(Debug, Clone, Serialize)]
pub struct AmbiguousAllele {
    pub allele: AlleleId,
    pub group_size: usize,
    /// The other members of its signature group, in table order
    pub shares_signature_with: Vec<AlleleId>,
}

/// Complete result of one panel-design run
#[derive(Debug, Clone, Serialize)]
pub struct PanelReport {
    pub generated_at: DateTime<Utc>,

    /// Reference allele (first table row)
    pub reference: AlleleId,

    /// Number of alleles in the table, reference included
    pub table_alleles: usize,

    /// Number of positions per allele
    pub positions: usize,

    /// The important-allele roster after duplicate removal, in input order
    pub roster: Vec<AlleleId>,

    /// Roster alleles excluded from the search as ambiguous
    pub ambiguous: Vec<AmbiguousAllele>,

    /// Roster alleles not present in the table
    pub missing: Vec<AlleleId>,

    /// Per-allele diagnostic positions for the searched alleles, roster order
    pub diagnostics: Vec<DiagnosticSet>,

    /// Union of all diagnostic positions, ascending
    pub candidate_pool: Vec<Position>,

    /// Outcome of the minimal-column search
    pub panel: PanelSolution,
}

impl PanelReport {
    /// Ids that actually took part in the search, roster order
    #[must_use]
    pub fn searched(&self) -> Vec<&AlleleId> {
        self.diagnostics.iter().map(|set| &set.allele).collect()
    }

    /// True when every roster allele took part in the search
    #[must_use]
    pub fn roster_fully_searched(&self) -> bool {
        self.ambiguous.is_empty() && self.missing.is_empty()
    }
}
