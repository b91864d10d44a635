use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, warn};

use crate::analysis::diff::DiagnosticSet;
use crate::analysis::groups::AmbiguityGroups;
use crate::analysis::panel::{candidate_pool, PanelConfig, PanelSearch};
use crate::analysis::report::{AmbiguousAllele, PanelReport};
use crate::core::table::HaplotypeTable;
use crate::core::types::AlleleId;

/// The main analysis engine: classification, diffing, and the panel search
/// against one haplotype table
pub struct AnalysisEngine<'a> {
    table: &'a HaplotypeTable,
    config: PanelConfig,
}

impl<'a> AnalysisEngine<'a> {
    /// Create an engine with default search configuration
    pub fn new(table: &'a HaplotypeTable) -> Self {
        Self {
            table,
            config: PanelConfig::default(),
        }
    }

    /// Create an engine with custom search configuration
    pub fn with_config(table: &'a HaplotypeTable, config: PanelConfig) -> Self {
        Self { table, config }
    }

    /// Design a discriminating column panel for the given important alleles.
    ///
    /// Roster ids that are absent from the table or ambiguous within it are
    /// excluded from the search and reported separately; an ambiguous allele
    /// would collide with its signature partners on every candidate.
    #[must_use]
    pub fn design(&self, roster: &[AlleleId]) -> PanelReport {
        if roster.is_empty() {
            warn!("important-allele roster is empty; the panel will be empty");
        }

        // A repeated roster id would collide with itself in the search
        let mut seen = HashSet::new();
        let roster: Vec<AlleleId> = roster
            .iter()
            .filter(|id| seen.insert((*id).clone()))
            .cloned()
            .collect();

        let groups = AmbiguityGroups::classify(self.table);
        debug!(
            alleles = self.table.len(),
            groups = groups.groups().len(),
            "classified haplotype table"
        );

        let mut ambiguous = Vec::new();
        let mut missing = Vec::new();
        let mut searched = Vec::new();
        let mut diagnostics = Vec::new();
        for id in &roster {
            match self.table.get(id) {
                None => missing.push(id.clone()),
                Some(_) if groups.is_ambiguous(id) => ambiguous.push(AmbiguousAllele {
                    allele: id.clone(),
                    group_size: groups.group_size(id),
                    shares_signature_with: groups.partners(id),
                }),
                Some(allele) => {
                    searched.push(id.clone());
                    diagnostics.push(DiagnosticSet::against_reference(allele, self.table));
                }
            }
        }

        let pool = candidate_pool(&diagnostics);
        debug!(
            searched = searched.len(),
            pool = pool.len(),
            "running minimal-column search"
        );
        let panel = PanelSearch::new(self.table, &searched, self.config.clone()).solve(&pool);

        PanelReport {
            generated_at: Utc::now(),
            reference: self.table.reference().id.clone(),
            table_alleles: self.table.len(),
            positions: self.table.width(),
            roster,
            ambiguous,
            missing,
            diagnostics,
            candidate_pool: pool,
            panel,
        }
    }
}
