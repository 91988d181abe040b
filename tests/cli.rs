use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn tally() -> Command {
    Command::cargo_bin("tally").unwrap()
}

fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn reference_csv(dir: &Path) -> PathBuf {
    write_csv(
        dir,
        "reference.csv",
        "Date,Description,Amount\n\
         01/01/2025,CLIENT INVOICE,100.00\n\
         01/05/2025,SUPPLY REFUND,-50.00\n",
    )
}

fn other_csv(dir: &Path) -> PathBuf {
    write_csv(
        dir,
        "other.csv",
        "Date,Memo,Amount\n\
         01/03/2025,INVOICE PAYMENT,100.00\n\
         01/04/2025,CARD FEE,7.77\n",
    )
}

#[test]
fn compare_reports_mismatches_and_totals() {
    let dir = tempfile::tempdir().unwrap();
    let reference = reference_csv(dir.path());
    let other = other_csv(dir.path());

    tally()
        .args([
            "compare",
            reference.to_str().unwrap(),
            other.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("2 mismatched entries")
                .and(predicate::str::contains("SUPPLY REFUND"))
                .and(predicate::str::contains("CARD FEE"))
                .and(predicate::str::contains("1 matched entries"))
                .and(predicate::str::contains(
                    "Total amount in reference file: $50.00",
                ))
                .and(predicate::str::contains("$107.77")),
        );
}

#[test]
fn compare_show_matches_lists_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let reference = reference_csv(dir.path());
    let other = other_csv(dir.path());

    tally()
        .args([
            "compare",
            reference.to_str().unwrap(),
            other.to_str().unwrap(),
            "--show-matches",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("CLIENT INVOICE")
                .and(predicate::str::contains("INVOICE PAYMENT"))
                .and(predicate::str::contains("Ref Date")),
        );
}

#[test]
fn compare_date_delta_zero_splits_near_matches() {
    let dir = tempfile::tempdir().unwrap();
    let reference = reference_csv(dir.path());
    let other = other_csv(dir.path());

    tally()
        .args([
            "compare",
            reference.to_str().unwrap(),
            other.to_str().unwrap(),
            "--date-delta",
            "0",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("4 mismatched entries")
                .and(predicate::str::contains("No matches found.")),
        );
}

#[test]
fn compare_exports_mismatches_with_column_union() {
    let dir = tempfile::tempdir().unwrap();
    let reference = reference_csv(dir.path());
    let other = other_csv(dir.path());
    let out = dir.path().join("mismatches.csv");

    tally()
        .args([
            "compare",
            reference.to_str().unwrap(),
            other.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mismatches exported to"));

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    // reference columns first, then the other file's unseen ones
    assert_eq!(lines.next().unwrap(), "Source,Date,Description,Amount,Memo");
    // other-side mismatch leaves the reference-only Description column empty
    assert!(content.contains("Other File,01/04/2025,,7.77,CARD FEE"));
    assert!(content.contains("Reference File,01/05/2025,SUPPLY REFUND,-50.00,"));
}

#[test]
fn compare_exports_matches() {
    let dir = tempfile::tempdir().unwrap();
    let reference = reference_csv(dir.path());
    let other = other_csv(dir.path());
    let out = dir.path().join("matches.csv");

    tally()
        .args([
            "compare",
            reference.to_str().unwrap(),
            other.to_str().unwrap(),
            "-m",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matches exported to"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Ref Date,Ref Description,Ref Amount,"));
    assert!(content.contains("01/01/2025,CLIENT INVOICE,100.00,01/03/2025,INVOICE PAYMENT,100.00"));
}

#[test]
fn compare_skips_bad_rows_with_a_warning_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write_csv(
        dir.path(),
        "reference.csv",
        "Date,Description,Amount\n\
         01/01/2025,GOOD ROW,10.00\n\
         garbage,BAD ROW,10.00\n",
    );
    let other = write_csv(
        dir.path(),
        "other.csv",
        "Date,Description,Amount\n01/02/2025,GOOD ROW,10.00\n",
    );

    tally()
        .args([
            "compare",
            reference.to_str().unwrap(),
            other.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("skipping row 3")
                .and(predicate::str::contains("unparsable date 'garbage'"))
                .and(predicate::str::contains("No mismatches found.")),
        );
}

#[test]
fn compare_strict_mode_fails_on_bad_row() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write_csv(
        dir.path(),
        "reference.csv",
        "Date,Description,Amount\n\
         01/01/2025,GOOD ROW,10.00\n\
         01/02/2025,BAD ROW,not-money\n",
    );
    let other = other_csv(dir.path());

    tally()
        .args([
            "compare",
            reference.to_str().unwrap(),
            other.to_str().unwrap(),
            "--strict",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("row 3")
                .and(predicate::str::contains("unparsable amount 'not-money'")),
        );
}

#[test]
fn compare_missing_file_exits_nonzero() {
    tally()
        .args(["compare", "/no/such/reference.csv", "/no/such/other.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn filter_projects_and_renames_columns() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(
        dir.path(),
        "bank.csv",
        "Post Date,Reference,Transaction Detail,Amount,Balance\n\
         01/15/2025,R1,ADOBE CREATIVE,-50.00,950.00\n",
    );
    write_csv(dir.path(), "odd.csv", "Foo,Bar\n1,2\n");

    tally()
        .args(["filter", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Skipping odd.csv: missing required columns.")
                .and(predicate::str::contains("1 file(s) processed")),
        );

    let filtered = dir.path().join("filtered").join("filtered_bank.csv");
    let content = fs::read_to_string(&filtered).unwrap();
    assert_eq!(
        content,
        "Date,Transaction Detail,Amount\n01/15/2025,ADOBE CREATIVE,-50.00\n"
    );
}

#[test]
fn filter_output_feeds_compare() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(
        dir.path(),
        "bank.csv",
        "Post Date,Transaction Detail,Amount\n\
         01/15/2025,ADOBE CREATIVE,-50.00\n",
    );

    tally()
        .args(["filter", dir.path().to_str().unwrap()])
        .assert()
        .success();

    let filtered = dir.path().join("filtered").join("filtered_bank.csv");
    let internal = write_csv(
        dir.path(),
        "internal.csv",
        "Date,Description,Amount\n01/16/2025,Adobe subscription,-50.00\n",
    );

    tally()
        .args([
            "compare",
            internal.to_str().unwrap(),
            filtered.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("No mismatches found.")
                .and(predicate::str::contains("1 matched entries")),
        );
}
