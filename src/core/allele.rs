use serde::{Deserialize, Serialize};

use crate::core::call::Call;
use crate::core::types::{AlleleId, Position};

/// One row of the haplotype table: an allele and its calls in column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allele {
    pub id: AlleleId,
    pub calls: Vec<Call>,
}

impl Allele {
    pub fn new(id: impl Into<String>, calls: Vec<Call>) -> Self {
        Self {
            id: AlleleId::new(id),
            calls,
        }
    }

    /// Build an allele from raw table symbols (`_`, `*`, or a base per column)
    pub fn from_symbols(id: impl Into<String>, symbols: &[&str]) -> Self {
        Self::new(id, symbols.iter().map(|s| Call::parse(s)).collect())
    }

    /// The (position, base) pairs of the allele's concrete calls, in position
    /// order. Wildcards carry no information of their own and are excluded.
    #[must_use]
    pub fn concrete_pairs(&self) -> Vec<(Position, &str)> {
        self.calls
            .iter()
            .enumerate()
            .filter_map(|(position, call)| call.base().map(|base| (position, base)))
            .collect()
    }

    /// Exact-match grouping signature: the concrete (position, base) pairs.
    ///
    /// Two alleles share a signature only when they agree on every concrete
    /// call and on which positions are concrete. An all-wildcard row has the
    /// empty signature and groups with any other all-wildcard row.
    #[must_use]
    pub fn signature(&self) -> Signature {
        Signature(
            self.concrete_pairs()
                .into_iter()
                .map(|(position, base)| (position, base.to_string()))
                .collect(),
        )
    }
}

/// Haplotype signature used for exact-match ambiguity grouping.
///
/// Pairs are held in ascending position order, so equality and hashing are
/// well defined without further normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Signature(Vec<(Position, String)>);

impl Signature {
    /// True when the allele has no concrete calls at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
