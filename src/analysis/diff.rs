use serde::Serialize;

use crate::core::allele::Allele;
use crate::core::table::HaplotypeTable;
use crate::core::types::{AlleleId, Position};

/// One position at which an allele departs from the reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticEntry {
    pub position: Position,
    /// Reference base at this position
    pub reference: String,
    /// The allele's own base
    pub observed: String,
}

impl DiagnosticEntry {
    /// Conventional `REF/ALT` rendering (e.g., `G/A`)
    #[must_use]
    pub fn ref_alt(&self) -> String {
        format!("{}/{}", self.reference, self.observed)
    }
}

/// The positions whose calls distinguish one allele from the reference
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticSet {
    pub allele: AlleleId,
    /// Entries in ascending position order
    pub entries: Vec<DiagnosticEntry>,
}

impl DiagnosticSet {
    /// Difference of the allele's concrete (position, base) pairs against the
    /// reference's.
    ///
    /// Wildcard calls contribute no pairs, so a `_` or `*` position can never
    /// appear here; the diagnostic positions are exactly those where the
    /// allele calls a concrete base other than the reference's.
    #[must_use]
    pub fn against_reference(allele: &Allele, table: &HaplotypeTable) -> Self {
        let entries = allele
            .concrete_pairs()
            .into_iter()
            .filter_map(|(position, observed)| {
                let reference = table.reference_base(position);
                (observed != reference).then(|| DiagnosticEntry {
                    position,
                    reference: reference.to_string(),
                    observed: observed.to_string(),
                })
            })
            .collect();

        Self {
            allele: allele.id.clone(),
            entries,
        }
    }

    /// The diagnostic positions, ascending
    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        self.entries.iter().map(|entry| entry.position).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::HaplotypeTable;

    fn table(rows: &[(&str, &[&str])]) -> HaplotypeTable {
        HaplotypeTable::new(
            rows.iter()
                .map(|(id, symbols)| Allele::from_symbols(*id, symbols))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_reference_against_itself_is_empty() {
        let table = table(&[("ref", &["A", "C", "G", "T"])]);
        let set = DiagnosticSet::against_reference(table.reference(), &table);
        assert!(set.is_empty());
    }

    #[test]
    fn test_single_substitution() {
        let table = table(&[("ref", &["A", "A", "A", "A"]), ("x", &["A", "A", "A", "G"])]);
        let allele = table.get(&AlleleId::new("x")).unwrap();
        let set = DiagnosticSet::against_reference(allele, &table);

        assert_eq!(set.positions(), vec![3]);
        assert_eq!(set.entries[0].ref_alt(), "A/G");
    }

    #[test]
    fn test_wildcards_never_diagnostic() {
        let table = table(&[("ref", &["G", "C", "T"]), ("x", &["_", "*", "A"])]);
        let allele = table.get(&AlleleId::new("x")).unwrap();
        let set = DiagnosticSet::against_reference(allele, &table);

        // Only the concrete mismatch at position 2 counts
        assert_eq!(set.positions(), vec![2]);
        assert_eq!(set.entries[0].ref_alt(), "T/A");
    }

    #[test]
    fn test_matching_concrete_calls_not_diagnostic() {
        let table = table(&[("ref", &["G", "C"]), ("x", &["G", "A"])]);
        let allele = table.get(&AlleleId::new("x")).unwrap();
        let set = DiagnosticSet::against_reference(allele, &table);

        assert_eq!(set.positions(), vec![1]);
    }

    #[test]
    fn test_entries_sorted_by_position() {
        let table = table(&[
            ("ref", &["A", "A", "A", "A", "A"]),
            ("x", &["T", "_", "C", "_", "G"]),
        ]);
        let allele = table.get(&AlleleId::new("x")).unwrap();
        let set = DiagnosticSet::against_reference(allele, &table);

        assert_eq!(set.positions(), vec![0, 2, 4]);
    }
}
