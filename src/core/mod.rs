//! Core data types for haplotype tables.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Call`]: One cell of the table (a concrete base or a wildcard)
//! - [`Allele`]: One table row with its grouping [`Signature`]
//! - [`HaplotypeTable`]: The validated allele-by-position matrix
//! - [`AlleleId`], [`Position`]: Identifier and index types
//! - [`PanelStatus`], [`ConflictKind`]: Result classification types
//!
//! ## Wildcard Semantics
//!
//! Two cell symbols are not concrete calls:
//!
//! | Symbol | Meaning     | In comparisons                        |
//! |--------|-------------|---------------------------------------|
//! | `_`    | ref-inherit | resolves to the reference base        |
//! | `*`    | unknown     | excluded; contributes nothing         |
//!
//! The first table row is the reference allele and must be wildcard-free, so
//! `_` always has a base to resolve to.

pub mod allele;
pub mod call;
pub mod table;
pub mod types;
