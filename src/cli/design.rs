use std::path::PathBuf;

use clap::Args;

use crate::analysis::engine::AnalysisEngine;
use crate::analysis::panel::{PanelConfig, SearchMode, DEFAULT_MAX_POOL};
use crate::analysis::report::PanelReport;
use crate::cli::OutputFormat;
use crate::core::types::PanelStatus;
use crate::parsing;

#[derive(Args)]
pub struct DesignArgs {
    /// Haplotype table: one tab-separated row per allele, reference first
    #[arg(required = true)]
    pub table: PathBuf,

    /// Important-allele roster, one id per line
    #[arg(required = true)]
    pub roster: PathBuf,

    /// Keep only table rows whose allele id starts with this prefix (e.g. 'B*')
    #[arg(long)]
    pub allele_prefix: Option<String>,

    /// Skip the subset search when the candidate pool exceeds this size
    #[arg(long, default_value_t = DEFAULT_MAX_POOL)]
    pub max_pool: usize,

    /// Scan every subset size instead of stopping at the first fully failing level
    #[arg(long)]
    pub exhaustive: bool,
}

/// Execute design subcommand
///
/// # Errors
///
/// Returns an error if either input file cannot be parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DesignArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let table = parsing::table::parse_table_file(&args.table, args.allele_prefix.as_deref())?;

    if verbose {
        eprintln!(
            "Parsed haplotype table: {} alleles, {} positions (reference: {})",
            table.len(),
            table.width(),
            table.reference().id
        );
    }

    let roster = parsing::roster::parse_roster_file(&args.roster)?;

    if verbose {
        eprintln!("Roster: {} allele id(s)", roster.len());
    }

    let config = PanelConfig {
        max_pool: args.max_pool,
        mode: if args.exhaustive {
            SearchMode::Exhaustive
        } else {
            SearchMode::EarlyExit
        },
    };

    let engine = AnalysisEngine::with_config(&table, config);
    let report = engine.design(&roster);

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => print_json_report(&report)?,
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

fn format_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_text_report(report: &PanelReport) {
    println!(
        "Reference allele: {} ({} alleles, {} positions)",
        report.reference, report.table_alleles, report.positions
    );

    if !report.ambiguous.is_empty() {
        println!("\nAmbiguous alleles excluded from the search:");
        for entry in &report.ambiguous {
            let partners: Vec<&str> = entry
                .shares_signature_with
                .iter()
                .map(|id| id.as_str())
                .collect();
            println!(
                "   {} (group of {}, same signature as: {})",
                entry.allele,
                entry.group_size,
                partners.join(", ")
            );
        }
    }

    if !report.missing.is_empty() {
        println!("\nRoster alleles not found in the table:");
        for id in &report.missing {
            println!("   {id}");
        }
    }

    if !report.diagnostics.is_empty() {
        println!("\nDiagnostic positions vs reference:");
        for set in &report.diagnostics {
            if set.is_empty() {
                println!("   {}  (no concrete difference from the reference)", set.allele);
                continue;
            }
            let pairs: Vec<String> = set
                .entries
                .iter()
                .map(|entry| format!("({}, '{}')", entry.position, entry.ref_alt()))
                .collect();
            println!("   {}  {}", set.allele, pairs.join(", "));
        }
    }

    println!(
        "\nCandidate columns ({}): {}",
        report.candidate_pool.len(),
        format_positions(&report.candidate_pool)
    );

    match &report.panel.status {
        PanelStatus::Reduced { from } => println!(
            "Minimal discriminating columns ({} of {}): {}",
            report.panel.columns.len(),
            from,
            format_positions(&report.panel.columns)
        ),
        PanelStatus::Unreduced => println!(
            "No smaller subset discriminates; keeping all {} candidate column(s): {}",
            report.panel.columns.len(),
            format_positions(&report.panel.columns)
        ),
        PanelStatus::SkippedTooLarge { pool_size, limit } => println!(
            "Candidate pool ({pool_size}) exceeds the search ceiling ({limit}); keeping the full pool: {}",
            format_positions(&report.panel.columns)
        ),
    }

    if !report.panel.conflicts.is_empty() {
        println!("\nUnresolvable collisions (no column subset can separate these):");
        for conflict in &report.panel.conflicts {
            println!(
                "   {} vs {} ({})",
                conflict.allele, conflict.collides_with, conflict.kind
            );
        }
    }

    println!();
}

fn print_json_report(report: &PanelReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_tsv_report(report: &PanelReport) {
    println!("record\tallele\tpositions\tdetail");

    for entry in &report.ambiguous {
        let partners: Vec<&str> = entry
            .shares_signature_with
            .iter()
            .map(|id| id.as_str())
            .collect();
        println!(
            "ambiguous\t{}\t\tgroup_of={};with={}",
            entry.allele,
            entry.group_size,
            partners.join(",")
        );
    }

    for id in &report.missing {
        println!("missing\t{id}\t\t");
    }

    for set in &report.diagnostics {
        let pairs: Vec<String> = set
            .entries
            .iter()
            .map(|entry| format!("{}:{}", entry.position, entry.ref_alt()))
            .collect();
        println!("diagnostic\t{}\t{}\t", set.allele, pairs.join(","));
    }

    let pool: Vec<String> = report.candidate_pool.iter().map(ToString::to_string).collect();
    println!("pool\t\t{}\t", pool.join(","));

    let columns: Vec<String> = report.panel.columns.iter().map(ToString::to_string).collect();
    let detail = match &report.panel.status {
        PanelStatus::Reduced { from } => format!("reduced_from={from}"),
        PanelStatus::Unreduced => "unreduced".to_string(),
        PanelStatus::SkippedTooLarge { pool_size, limit } => {
            format!("skipped;pool={pool_size};limit={limit}")
        }
    };
    println!("panel\t\t{}\t{detail}", columns.join(","));

    for conflict in &report.panel.conflicts {
        println!(
            "conflict\t{}\t\tcollides_with={};kind={:?}",
            conflict.allele, conflict.collides_with, conflict.kind
        );
    }
}
