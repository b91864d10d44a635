use std::collections::HashMap;

use crate::core::allele::Signature;
use crate::core::table::HaplotypeTable;
use crate::core::types::AlleleId;

/// A set of alleles sharing one haplotype signature
#[derive(Debug, Clone)]
pub struct SignatureGroup {
    pub signature: Signature,
    /// Member ids in table row order
    pub members: Vec<AlleleId>,
}

impl SignatureGroup {
    /// An allele is ambiguous when its signature is not unique in the table
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.members.len() > 1
    }
}

/// Ambiguity classification for a whole table.
///
/// Every allele belongs to exactly one group. The classification is computed
/// once from an immutable table and never updated in place; queries against
/// ids the table has never seen report a group size of 1.
#[derive(Debug, Clone)]
pub struct AmbiguityGroups {
    groups: Vec<SignatureGroup>,
    size_by_allele: HashMap<AlleleId, usize>,
}

impl AmbiguityGroups {
    /// Group every table allele by exact signature equality
    #[must_use]
    pub fn classify(table: &HaplotypeTable) -> Self {
        let mut index_by_signature: HashMap<Signature, usize> = HashMap::new();
        let mut groups: Vec<SignatureGroup> = Vec::new();

        for allele in table.alleles() {
            let signature = allele.signature();
            let group_index = *index_by_signature
                .entry(signature.clone())
                .or_insert_with(|| {
                    groups.push(SignatureGroup {
                        signature,
                        members: Vec::new(),
                    });
                    groups.len() - 1
                });
            groups[group_index].members.push(allele.id.clone());
        }

        let mut size_by_allele = HashMap::with_capacity(table.len());
        for group in &groups {
            for member in &group.members {
                size_by_allele.insert(member.clone(), group.members.len());
            }
        }

        Self {
            groups,
            size_by_allele,
        }
    }

    /// Size of the group `id` belongs to; 1 for ids outside the table
    #[must_use]
    pub fn group_size(&self, id: &AlleleId) -> usize {
        self.size_by_allele.get(id).copied().unwrap_or(1)
    }

    /// True when `id` shares its signature with at least one other allele
    #[must_use]
    pub fn is_ambiguous(&self, id: &AlleleId) -> bool {
        self.group_size(id) > 1
    }

    /// All groups, ordered by first appearance in the table
    #[must_use]
    pub fn groups(&self) -> &[SignatureGroup] {
        &self.groups
    }

    /// Groups with more than one member
    pub fn ambiguous_groups(&self) -> impl Iterator<Item = &SignatureGroup> {
        self.groups.iter().filter(|group| group.is_ambiguous())
    }

    /// The other members of `id`'s group; empty for unique or unknown ids
    #[must_use]
    pub fn partners(&self, id: &AlleleId) -> Vec<AlleleId> {
        self.groups
            .iter()
            .find(|group| group.members.contains(id))
            .map(|group| {
                group
                    .members
                    .iter()
                    .filter(|member| *member != id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
