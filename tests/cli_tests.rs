//! End-to-end tests for the snp-panel binary.
//!
//! Each test writes table/roster fixtures to a temporary directory and runs
//! the real binary against them.

use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("snp-panel").unwrap()
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Six-position HLA-B style table. B*13090101 and B*13090102 share a
/// signature; everything else is unique.
const TABLE: &str = "\
B*07020101\tA\tC\tG\tT\tA\tA
B*13090101\t_\t_\t_\t_\tG\t_
B*13090102\t_\t_\t_\t_\tG\t_
B*35430101\t_\tT\t_\t_\t_\tC
B*44020101\t_\tT\t_\t_\t_\t_
B*51010101\t*\t*\tA\t_\t_\t_
";

#[test]
fn test_design_text_report() {
    let dir = TempDir::new().unwrap();
    let table = write_file(dir.path(), "haplotypes.tsv", TABLE);
    let roster = write_file(
        dir.path(),
        "important.txt",
        "B*35430101\nB*44020101\nB*13090101\nB*99999999\n",
    );

    cmd()
        .arg("design")
        .arg(&table)
        .arg(&roster)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference allele: B*07020101"))
        .stdout(predicate::str::contains("B*13090101 (group of 2"))
        .stdout(predicate::str::contains("B*13090102"))
        .stdout(predicate::str::contains("B*99999999"))
        .stdout(predicate::str::contains("(1, 'C/T'), (5, 'A/C')"))
        .stdout(predicate::str::contains("Candidate columns (2): 1, 5"))
        .stdout(predicate::str::contains("No smaller subset discriminates"));
}

#[test]
fn test_design_reduces_panel() {
    let dir = TempDir::new().unwrap();
    let table = write_file(dir.path(), "haplotypes.tsv", TABLE);
    let roster = write_file(dir.path(), "important.txt", "B*35430101\n");

    // Column 1 is shadowed by B*44020101, so position 5 alone must carry
    // the panel
    cmd()
        .arg("design")
        .arg(&table)
        .arg(&roster)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Minimal discriminating columns (1 of 2): 5",
        ));
}

#[test]
fn test_design_json_report() {
    let dir = TempDir::new().unwrap();
    let table = write_file(dir.path(), "haplotypes.tsv", TABLE);
    let roster = write_file(
        dir.path(),
        "important.txt",
        "B*35430101\nB*44020101\nB*13090101\nB*99999999\n",
    );

    let assert = cmd()
        .arg("design")
        .arg(&table)
        .arg(&roster)
        .args(["--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(report["reference"], "B*07020101");
    assert_eq!(report["candidate_pool"], serde_json::json!([1, 5]));
    assert_eq!(report["panel"]["columns"], serde_json::json!([1, 5]));
    assert_eq!(report["panel"]["status"], "unreduced");
    assert_eq!(report["ambiguous"][0]["allele"], "B*13090101");
    assert_eq!(report["ambiguous"][0]["group_size"], 2);
    assert_eq!(report["missing"][0], "B*99999999");
    assert!(report["generated_at"].is_string());
}

#[test]
fn test_design_tsv_report() {
    let dir = TempDir::new().unwrap();
    let table = write_file(dir.path(), "haplotypes.tsv", TABLE);
    let roster = write_file(dir.path(), "important.txt", "B*35430101\nB*13090101\n");

    cmd()
        .arg("design")
        .arg(&table)
        .arg(&roster)
        .args(["--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("record\tallele\tpositions\tdetail"))
        .stdout(predicate::str::contains(
            "ambiguous\tB*13090101\t\tgroup_of=2;with=B*13090102",
        ))
        .stdout(predicate::str::contains("diagnostic\tB*35430101\t1:C/T,5:A/C\t"))
        .stdout(predicate::str::contains("panel\t\t5\treduced_from=2"));
}

#[test]
fn test_design_exhaustive_flag_finds_deeper_reduction() {
    // Untyped cells break the usual monotonicity: every 2-column candidate
    // collides while column 0 alone passes. Only --exhaustive reaches it.
    let table_text = "\
REF\tA\tA\tA
X\tG\t*\t*
Y\t*\tG\tG
U\tT\tG\tG
";
    let dir = TempDir::new().unwrap();
    let table = write_file(dir.path(), "haplotypes.tsv", table_text);
    let roster = write_file(dir.path(), "important.txt", "X\nY\n");

    cmd()
        .arg("design")
        .arg(&table)
        .arg(&roster)
        .assert()
        .success()
        .stdout(predicate::str::contains("No smaller subset discriminates"));

    cmd()
        .arg("design")
        .arg(&table)
        .arg(&roster)
        .arg("--exhaustive")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Minimal discriminating columns (1 of 3): 0",
        ));
}

#[test]
fn test_design_max_pool_ceiling() {
    let dir = TempDir::new().unwrap();
    let table = write_file(dir.path(), "haplotypes.tsv", TABLE);
    let roster = write_file(dir.path(), "important.txt", "B*35430101\n");

    cmd()
        .arg("design")
        .arg(&table)
        .arg(&roster)
        .args(["--max-pool", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exceeds the search ceiling (1)"))
        .stdout(predicate::str::contains("keeping the full pool: 1, 5"));
}

#[test]
fn test_design_allele_prefix_filters_rows() {
    let mixed = "\
A*01010101\tG\tG\tG\tG\tG\tG
B*07020101\tA\tC\tG\tT\tA\tA
B*35430101\t_\tT\t_\t_\t_\tC
C*01020101\tT\tT\tT\tT\tT\tT
";
    let dir = TempDir::new().unwrap();
    let table = write_file(dir.path(), "haplotypes.tsv", mixed);
    let roster = write_file(dir.path(), "important.txt", "B*35430101\n");

    cmd()
        .arg("design")
        .arg(&table)
        .arg(&roster)
        .args(["--allele-prefix", "B*"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference allele: B*07020101"))
        .stdout(predicate::str::contains("2 alleles"));
}

#[test]
fn test_design_gzipped_table() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let dir = TempDir::new().unwrap();
    let table_path = dir.path().join("haplotypes.tsv.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(TABLE.as_bytes()).unwrap();
    std::fs::write(&table_path, encoder.finish().unwrap()).unwrap();
    let roster = write_file(dir.path(), "important.txt", "B*35430101\n");

    cmd()
        .arg("design")
        .arg(&table_path)
        .arg(&roster)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference allele: B*07020101"));
}

#[test]
fn test_design_verbose_logs_dimensions() {
    let dir = TempDir::new().unwrap();
    let table = write_file(dir.path(), "haplotypes.tsv", TABLE);
    let roster = write_file(dir.path(), "important.txt", "B*35430101\n");

    cmd()
        .arg("design")
        .arg(&table)
        .arg(&roster)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("Parsed haplotype table: 6 alleles"))
        .stderr(predicate::str::contains("Roster: 1 allele id(s)"));
}

#[test]
fn test_design_rejects_ragged_table() {
    let dir = TempDir::new().unwrap();
    let table = write_file(dir.path(), "bad.tsv", "B*07\tA\tC\tG\nB*13\tA\tC\n");
    let roster = write_file(dir.path(), "important.txt", "B*13\n");

    cmd()
        .arg("design")
        .arg(&table)
        .arg(&roster)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 3"));
}

#[test]
fn test_design_rejects_wildcard_reference() {
    let dir = TempDir::new().unwrap();
    let table = write_file(dir.path(), "bad.tsv", "B*07\tA\t_\nB*13\tA\tT\n");
    let roster = write_file(dir.path(), "important.txt", "B*13\n");

    cmd()
        .arg("design")
        .arg(&table)
        .arg(&roster)
        .assert()
        .failure()
        .stderr(predicate::str::contains("reference row must be fully concrete"));
}

#[test]
fn test_design_missing_table_file() {
    let dir = TempDir::new().unwrap();
    let roster = write_file(dir.path(), "important.txt", "B*13\n");

    cmd()
        .arg("design")
        .arg(dir.path().join("nope.tsv"))
        .arg(&roster)
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_classify_text_report() {
    let dir = TempDir::new().unwrap();
    let table = write_file(dir.path(), "haplotypes.tsv", TABLE);

    cmd()
        .arg("classify")
        .arg(&table)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "6 alleles in 5 signature groups; 2 alleles are ambiguous across 1 groups",
        ))
        .stdout(predicate::str::contains(
            "group of 2: B*13090101, B*13090102",
        ));
}

#[test]
fn test_classify_unambiguous_table() {
    let dir = TempDir::new().unwrap();
    let table = write_file(dir.path(), "haplotypes.tsv", "B*07\tA\tC\nB*13\t_\tT\n");

    cmd()
        .arg("classify")
        .arg(&table)
        .assert()
        .success()
        .stdout(predicate::str::contains("unique haplotype signature"));
}

#[test]
fn test_classify_json_report() {
    let dir = TempDir::new().unwrap();
    let table = write_file(dir.path(), "haplotypes.tsv", TABLE);

    let assert = cmd()
        .arg("classify")
        .arg(&table)
        .args(["--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let output: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(output["table_alleles"], 6);
    assert_eq!(output["signature_groups"], 5);
    assert_eq!(output["ambiguous_groups"][0]["size"], 2);
    assert_eq!(
        output["ambiguous_groups"][0]["members"],
        serde_json::json!(["B*13090101", "B*13090102"])
    );
}

#[test]
fn test_classify_tsv_report() {
    let dir = TempDir::new().unwrap();
    let table = write_file(dir.path(), "haplotypes.tsv", TABLE);

    cmd()
        .arg("classify")
        .arg(&table)
        .args(["--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("group\tsize\tmembers"))
        .stdout(predicate::str::contains("1\t2\tB*13090101,B*13090102"));
}
