//! Command-line interface for snp-panel.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **design**: Select a minimal discriminating column panel for a roster
//!   of important alleles
//! - **classify**: Report the ambiguity groups of a haplotype table
//!
//! ## Usage
//!
//! ```text
//! # Design a panel for the alleles listed in important.txt
//! snp-panel design haplotypes.tsv important.txt
//!
//! # Restrict the table to one gene and allow a larger search
//! snp-panel design haplotypes.tsv.gz important.txt --allele-prefix 'B*' --max-pool 18
//!
//! # JSON output for scripting
//! snp-panel design haplotypes.tsv important.txt --format json
//!
//! # Which alleles does this table confuse?
//! snp-panel classify haplotypes.tsv --allele-prefix 'B*'
//! ```

use clap::{Parser, Subcommand};

pub mod classify;
pub mod design;

#[derive(Parser)]
#[command(name = "snp-panel")]
#[command(version)]
#[command(about = "Select minimal discriminating SNP panels from gene haplotype tables")]
#[command(
    long_about = "snp-panel works on a haplotype table whose first row is the reference allele.\n\nIt reports which alleles the table cannot tell apart (identical haplotype signatures), computes each important allele's diagnostic positions against the reference, and searches for the smallest set of columns that still distinguishes every important allele from every other allele in the table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Design a minimal discriminating column panel for important alleles
    Design(design::DesignArgs),

    /// Report the ambiguity groups of a haplotype table
    Classify(classify::ClassifyArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
