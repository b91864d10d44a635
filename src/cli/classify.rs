use std::path::PathBuf;

use clap::Args;

use crate::analysis::groups::AmbiguityGroups;
use crate::cli::OutputFormat;
use crate::core::table::HaplotypeTable;
use crate::parsing;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Haplotype table: one tab-separated row per allele, reference first
    #[arg(required = true)]
    pub table: PathBuf,

    /// Keep only table rows whose allele id starts with this prefix (e.g. 'B*')
    #[arg(long)]
    pub allele_prefix: Option<String>,
}

/// Execute classify subcommand
///
/// # Errors
///
/// Returns an error if the table cannot be parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ClassifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let table = parsing::table::parse_table_file(&args.table, args.allele_prefix.as_deref())?;

    if verbose {
        eprintln!(
            "Parsed haplotype table: {} alleles, {} positions (reference: {})",
            table.len(),
            table.width(),
            table.reference().id
        );
    }

    let groups = AmbiguityGroups::classify(&table);

    match format {
        OutputFormat::Text => print_text_groups(&table, &groups),
        OutputFormat::Json => print_json_groups(&table, &groups)?,
        OutputFormat::Tsv => print_tsv_groups(&groups),
    }

    Ok(())
}

fn print_text_groups(table: &HaplotypeTable, groups: &AmbiguityGroups) {
    let ambiguous_alleles: usize = groups.ambiguous_groups().map(|g| g.members.len()).sum();
    let ambiguous_groups = groups.ambiguous_groups().count();

    println!(
        "{} alleles in {} signature groups; {} alleles are ambiguous across {} groups",
        table.len(),
        groups.groups().len(),
        ambiguous_alleles,
        ambiguous_groups
    );

    if ambiguous_groups == 0 {
        println!("Every allele in the table has a unique haplotype signature.");
        return;
    }

    println!();
    for group in groups.ambiguous_groups() {
        let members: Vec<&str> = group.members.iter().map(|id| id.as_str()).collect();
        println!("   group of {}: {}", group.members.len(), members.join(", "));
    }
}

fn print_json_groups(table: &HaplotypeTable, groups: &AmbiguityGroups) -> anyhow::Result<()> {
    let ambiguous: Vec<serde_json::Value> = groups
        .ambiguous_groups()
        .map(|group| {
            serde_json::json!({
                "size": group.members.len(),
                "members": group.members,
            })
        })
        .collect();

    let output = serde_json::json!({
        "reference": table.reference().id,
        "table_alleles": table.len(),
        "signature_groups": groups.groups().len(),
        "ambiguous_groups": ambiguous,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_groups(groups: &AmbiguityGroups) {
    println!("group\tsize\tmembers");
    for (i, group) in groups.ambiguous_groups().enumerate() {
        let members: Vec<&str> = group.members.iter().map(|id| id.as_str()).collect();
        println!("{}\t{}\t{}", i + 1, group.members.len(), members.join(","));
    }
}
