use serde::{Deserialize, Serialize};

/// Table symbol for a call that inherits the reference allele's base
pub const REF_INHERIT_SYMBOL: &str = "_";

/// Table symbol for a call with no information
pub const UNKNOWN_SYMBOL: &str = "*";

/// A single cell of the haplotype table: one allele's call at one position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Call {
    /// A concrete base or variant code (e.g., `A`, `G`)
    Base(String),
    /// `_`: same as the reference allele at this position
    RefInherit,
    /// `*`: untyped; carries no information and is excluded from comparisons
    Unknown,
}

impl Call {
    /// Parse a table cell into a call. Anything that is not one of the two
    /// wildcard symbols is taken as a concrete base verbatim.
    pub fn parse(symbol: &str) -> Self {
        match symbol {
            REF_INHERIT_SYMBOL => Call::RefInherit,
            UNKNOWN_SYMBOL => Call::Unknown,
            base => Call::Base(base.to_string()),
        }
    }

    /// The concrete base, if this call carries one
    #[must_use]
    pub fn base(&self) -> Option<&str> {
        match self {
            Call::Base(base) => Some(base.as_str()),
            _ => None,
        }
    }

    /// True for `_` and `*`, the two wildcard symbols
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        !matches!(self, Call::Base(_))
    }
}

impl std::fmt::Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Call::Base(base) => write!(f, "{base}"),
            Call::RefInherit => write!(f, "{REF_INHERIT_SYMBOL}"),
            Call::Unknown => write!(f, "{UNKNOWN_SYMBOL}"),
        }
    }
}
