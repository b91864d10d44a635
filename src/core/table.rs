use std::collections::HashMap;

use thiserror::Error;

use crate::core::allele::Allele;
use crate::core::types::{AlleleId, Position};

/// Structural violations that make a haplotype table unusable
#[derive(Error, Debug)]
pub enum TableError {
    #[error("haplotype table has no allele rows")]
    Empty,

    #[error("allele '{id}' has {found} calls, expected {expected}")]
    RaggedRow {
        id: AlleleId,
        expected: usize,
        found: usize,
    },

    #[error("reference allele '{id}' has wildcard '{symbol}' at position {position}; the reference row must be fully concrete")]
    WildcardInReference {
        id: AlleleId,
        position: Position,
        symbol: String,
    },

    #[error("duplicate allele id '{0}' in haplotype table")]
    DuplicateAllele(AlleleId),
}

/// A validated allele-by-position call matrix.
///
/// The first row is the reference allele. Construction enforces the
/// structural rules every downstream computation leans on: at least one row,
/// a uniform column count, a fully concrete reference row, and unique ids.
#[derive(Debug, Clone)]
pub struct HaplotypeTable {
    alleles: Vec<Allele>,
    id_to_index: HashMap<AlleleId, usize>,
    width: usize,
}

impl HaplotypeTable {
    pub fn new(alleles: Vec<Allele>) -> Result<Self, TableError> {
        let Some(first) = alleles.first() else {
            return Err(TableError::Empty);
        };
        let width = first.calls.len();

        for (position, call) in first.calls.iter().enumerate() {
            if call.is_wildcard() {
                return Err(TableError::WildcardInReference {
                    id: first.id.clone(),
                    position,
                    symbol: call.to_string(),
                });
            }
        }

        let mut id_to_index = HashMap::with_capacity(alleles.len());
        for (index, allele) in alleles.iter().enumerate() {
            if allele.calls.len() != width {
                return Err(TableError::RaggedRow {
                    id: allele.id.clone(),
                    expected: width,
                    found: allele.calls.len(),
                });
            }
            if id_to_index.insert(allele.id.clone(), index).is_some() {
                return Err(TableError::DuplicateAllele(allele.id.clone()));
            }
        }

        Ok(Self {
            alleles,
            id_to_index,
            width,
        })
    }

    /// The reference allele (first table row)
    #[must_use]
    pub fn reference(&self) -> &Allele {
        &self.alleles[0]
    }

    /// The reference base at `position`
    #[must_use]
    pub fn reference_base(&self, position: Position) -> &str {
        // Safety: the constructor rejects wildcard calls in the first row
        self.reference().calls[position]
            .base()
            .expect("reference row is fully concrete")
    }

    #[must_use]
    pub fn get(&self, id: &AlleleId) -> Option<&Allele> {
        self.id_to_index.get(id).map(|&index| &self.alleles[index])
    }

    #[must_use]
    pub fn contains(&self, id: &AlleleId) -> bool {
        self.id_to_index.contains_key(id)
    }

    /// Row index of `id`, in table order
    #[must_use]
    pub fn index_of(&self, id: &AlleleId) -> Option<usize> {
        self.id_to_index.get(id).copied()
    }

    #[must_use]
    pub fn alleles(&self) -> &[Allele] {
        &self.alleles
    }

    /// Number of positions (columns) per allele
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of alleles (rows), reference included
    #[must_use]
    pub fn len(&self) -> usize {
        self.alleles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alleles.is_empty()
    }
}
