use std::collections::HashSet;

use itertools::Itertools;
use serde::Serialize;
use tracing::debug;

use crate::core::allele::Allele;
use crate::core::call::Call;
use crate::core::table::HaplotypeTable;
use crate::core::types::{AlleleId, ConflictKind, PanelStatus, Position};

use super::diff::DiagnosticSet;

/// Default ceiling on the candidate pool size. The subset search enumerates
/// every combination of every size below the pool, so it is skipped outright
/// for pools larger than this.
pub const DEFAULT_MAX_POOL: usize = 15;

/// How the descending-size search treats a size level with no passing
/// candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Stop at the first fully failing size level.
    ///
    /// This assumes discriminating power only shrinks as columns are removed.
    /// Untyped (`*`) calls make that an assumption rather than a guarantee:
    /// removing a column also removes the projection-length difference it may
    /// have induced, so a smaller set can occasionally separate alleles that
    /// a larger one could not.
    #[default]
    EarlyExit,
    /// Scan every size level down to 1 regardless of failures
    Exhaustive,
}

/// Configuration for the minimal-column search
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Pool sizes above this skip the brute force entirely
    pub max_pool: usize,
    pub mode: SearchMode,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            max_pool: DEFAULT_MAX_POOL,
            mode: SearchMode::EarlyExit,
        }
    }
}

/// An important allele whose projection is not unique even under the full
/// candidate pool. No subset of the pool can separate the pair, so the
/// collision is reported rather than silently folded into a failed search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelConflict {
    pub allele: AlleleId,
    pub collides_with: AlleleId,
    pub kind: ConflictKind,
}

/// Result of the minimal-column search
#[derive(Debug, Clone, Serialize)]
pub struct PanelSolution {
    /// The winning column set, ascending
    pub columns: Vec<Position>,
    pub status: PanelStatus,
    /// Collisions that persist under the full pool
    pub conflicts: Vec<PanelConflict>,
}

/// Union of all diagnostic positions, ascending. This is the universe the
/// search shrinks from; positions outside it never enter a candidate.
#[must_use]
pub fn candidate_pool(diagnostics: &[DiagnosticSet]) -> Vec<Position> {
    let mut pool: Vec<Position> = diagnostics
        .iter()
        .flat_map(|set| set.entries.iter().map(|entry| entry.position))
        .collect();
    pool.sort_unstable();
    pool.dedup();
    pool
}

/// Project an allele onto `columns`, resolving wildcards against the
/// reference row: `_` takes the reference base, `*` is omitted outright
/// (nothing is inserted in its place, so the projection shortens).
fn project<'a>(
    allele: &'a Allele,
    columns: &[Position],
    table: &'a HaplotypeTable,
) -> Vec<&'a str> {
    let mut projected = Vec::with_capacity(columns.len());
    for &position in columns {
        match &allele.calls[position] {
            Call::Base(base) => projected.push(base.as_str()),
            Call::RefInherit => projected.push(table.reference_base(position)),
            Call::Unknown => {}
        }
    }
    projected
}

enum LevelOutcome {
    /// The first passing candidate at this size, in lexicographic order
    Passed(Vec<Position>),
    Failed,
}

/// Brute-force search for the smallest column subset that discriminates the
/// important alleles from each other and from every other table allele.
pub struct PanelSearch<'a> {
    table: &'a HaplotypeTable,
    /// Row indices of the alleles that must be told apart
    important: Vec<usize>,
    /// Row indices of every other allele, reference included
    unimportant: Vec<usize>,
    config: PanelConfig,
}

impl<'a> PanelSearch<'a> {
    pub fn new(table: &'a HaplotypeTable, important_ids: &[AlleleId], config: PanelConfig) -> Self {
        let important_set: HashSet<&AlleleId> = important_ids.iter().collect();
        let mut important = Vec::new();
        let mut unimportant = Vec::new();
        for (index, allele) in table.alleles().iter().enumerate() {
            if important_set.contains(&allele.id) {
                important.push(index);
            } else {
                unimportant.push(index);
            }
        }
        Self {
            table,
            important,
            unimportant,
            config,
        }
    }

    /// Run the descending-size search over `pool`.
    ///
    /// Sizes run from `pool.len() - 1` down to 1; the full pool itself is
    /// never evaluated as a candidate. The answer starts as the full pool, so
    /// a run where nothing passes still returns a valid (maximal) column set.
    #[must_use]
    pub fn solve(&self, pool: &[Position]) -> PanelSolution {
        let conflicts = self.full_pool_conflicts(pool);

        if pool.len() > self.config.max_pool {
            debug!(
                pool = pool.len(),
                limit = self.config.max_pool,
                "candidate pool exceeds ceiling, skipping subset search"
            );
            return PanelSolution {
                columns: pool.to_vec(),
                status: PanelStatus::SkippedTooLarge {
                    pool_size: pool.len(),
                    limit: self.config.max_pool,
                },
                conflicts,
            };
        }

        let mut best: Option<Vec<Position>> = None;

        for size in (1..pool.len()).rev() {
            match self.evaluate_level(pool, size) {
                LevelOutcome::Passed(winner) => {
                    debug!(size, columns = ?winner, "size level passed");
                    best = Some(winner);
                }
                LevelOutcome::Failed => {
                    debug!(size, "size level failed");
                    if self.config.mode == SearchMode::EarlyExit {
                        break;
                    }
                }
            }
        }

        match best {
            Some(columns) => PanelSolution {
                status: PanelStatus::Reduced { from: pool.len() },
                columns,
                conflicts,
            },
            None => PanelSolution {
                columns: pool.to_vec(),
                status: PanelStatus::Unreduced,
                conflicts,
            },
        }
    }

    /// Try every `size`-combination of the pool in lexicographic order. The
    /// first passing candidate wins the level; later ones at the same size
    /// cannot beat it.
    fn evaluate_level(&self, pool: &[Position], size: usize) -> LevelOutcome {
        for candidate in pool.iter().copied().combinations(size) {
            if self.discriminates(&candidate) {
                return LevelOutcome::Passed(candidate);
            }
        }
        LevelOutcome::Failed
    }

    /// A candidate passes when the projected important alleles are pairwise
    /// distinct and distinct from every projected unimportant allele.
    fn discriminates(&self, columns: &[Position]) -> bool {
        let mut seen: HashSet<Vec<&str>> = HashSet::with_capacity(self.important.len());

        for &index in &self.important {
            let projection = project(&self.table.alleles()[index], columns, self.table);
            if !seen.insert(projection) {
                return false;
            }
        }

        for &index in &self.unimportant {
            let projection = project(&self.table.alleles()[index], columns, self.table);
            if seen.contains(&projection) {
                return false;
            }
        }

        true
    }

    /// Collisions under the full pool. A pair that collides here stays
    /// merged in any winning subset's report, whatever the search returns.
    fn full_pool_conflicts(&self, pool: &[Position]) -> Vec<PanelConflict> {
        let mut conflicts = Vec::new();

        for (slot, &index) in self.important.iter().enumerate() {
            let allele = &self.table.alleles()[index];
            let projection = project(allele, pool, self.table);

            for &other_index in self.important.iter().skip(slot + 1) {
                let other = &self.table.alleles()[other_index];
                if project(other, pool, self.table) == projection {
                    conflicts.push(PanelConflict {
                        allele: allele.id.clone(),
                        collides_with: other.id.clone(),
                        kind: ConflictKind::OtherImportant,
                    });
                }
            }
            for &other_index in &self.unimportant {
                let other = &self.table.alleles()[other_index];
                if project(other, pool, self.table) == projection {
                    conflicts.push(PanelConflict {
                        allele: allele.id.clone(),
                        collides_with: other.id.clone(),
                        kind: ConflictKind::Unimportant,
                    });
                }
            }
        }

        conflicts
    }
}
