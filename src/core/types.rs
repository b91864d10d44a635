use serde::{Deserialize, Serialize};

/// Zero-based column index into a haplotype table.
///
/// Positions are shared across rows: the same index names the same genomic
/// site in every allele.
pub type Position = usize;

/// Unique identifier for an allele (e.g., `B*13090101`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlleleId(pub String);

impl AlleleId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AlleleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of the minimal-column search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelStatus {
    /// A strictly smaller passing column set was found
    Reduced {
        /// Size of the candidate pool the answer was cut down from
        from: usize,
    },
    /// No smaller subset discriminates; the full candidate pool is the answer
    Unreduced,
    /// The pool exceeded the brute-force ceiling and the search was skipped
    SkippedTooLarge { pool_size: usize, limit: usize },
}

/// What a projected important allele collides with under the full pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Indistinguishable from another allele that must also be identified
    OtherImportant,
    /// Indistinguishable from an allele outside the important set
    Unimportant,
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OtherImportant => write!(f, "another important allele"),
            Self::Unimportant => write!(f, "an allele outside the important set"),
        }
    }
}
