//! E2E тесты для CLI инструмента `bai2`.
//!
//! Каждая подкоманда запускается на фикстурах:
//! - `parse`: чтение и валидация
//! - `print`: повторная сериализация в BAI2
//! - `format`: JSON проекция

use std::fs;

use assert_cmd::Command;
use e2e_tests::fixture;
use predicates::prelude::*;
use tempfile::tempdir;

/// Создать команду для запуска `bai2`.
///
/// `cargo_bin` deprecated из-за edge case с custom build directories,
/// но это единственный способ для кросс-крейтовых бинарников.
#[expect(deprecated)]
fn bai2() -> Command {
    Command::cargo_bin("bai2").unwrap()
}

fn fixture_arg(name: &str) -> String {
    fixture(name).to_str().unwrap().to_string()
}

// ============================================================================
// Подкоманда parse: чтение и валидация
// ============================================================================

#[test]
fn parse_reports_envelope_counts() {
    bai2()
        .args(["parse", "--input", &fixture_arg("simple.txt")])
        .assert()
        .success()
        .stdout("Valid BAI2 file: 1 group(s), 1 account(s), 2 detail(s)\n");
}

#[test]
fn parse_reads_stdin() {
    let input = fs::read(fixture("continuations.txt")).unwrap();
    bai2()
        .arg("parse")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 account(s), 2 detail(s)"));
}

#[test]
fn parse_rejects_invalid_header() {
    bai2()
        .args(["parse", "-i", &fixture_arg("bad_header_date.txt")])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains(
            "ERROR parsing file header on line 1 (FileHeader: invalid FileCreatedDate)",
        ));
}

#[test]
fn parse_version_requires_flag() {
    bai2()
        .args(["parse", "-i", &fixture_arg("version_three.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid VersionNumber"));

    bai2()
        .args(["parse", "-i", &fixture_arg("version_three.txt"), "--ignore-version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 group(s)"));
}

#[test]
fn missing_input_file() {
    bai2()
        .args(["parse", "-i", "does-not-exist.bai"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file: does-not-exist.bai"));
}

// ============================================================================
// Подкоманда print: вывод в BAI2
// ============================================================================

#[test]
fn print_refolds_at_header_width() {
    let expected = "\
01,0004,12345,060321,0829,001,80,1,2/
02,12345,0004,1,060317,,CAD,/
03,10200123456,CAD,040,+000000000000,,,045,+000000000000,,,046,+000000000000,,/
88,047,+000000000000,,,048,+000000000000,,,049,+000000000000,,,050/
88,+000000000000,,,051,+000000000000,,,052,+000000000000,,,053,+000000000000,,/
16,409,000000000002500,V,060316,1300,,,RETURNED CHEQUE     /
16,409,000000000090000,V,060316,1300,,,RTN-UNKNOWN         /
49,+00000000000834000,14/
98,+00000000001280000,2,25/
99,+00000000001280000,1,27/
";

    bai2()
        .args(["print", "-i", &fixture_arg("continuations.txt")])
        .assert()
        .success()
        .stdout(expected)
        .stderr(predicate::str::contains("Wrote 10 record(s)"));
}

#[test]
fn print_without_folding_round_trips() {
    let input = fs::read_to_string(fixture("simple.txt")).unwrap();
    bai2()
        .args(["print", "--width", "0"])
        .write_stdin(input.clone())
        .assert()
        .success()
        .stdout(format!("{input}\n"));
}

#[test]
fn print_narrow_output_reads_back() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("narrow.bai");

    bai2()
        .args([
            "print",
            "-i",
            &fixture_arg("continuations.txt"),
            "--width",
            "40",
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.lines().filter(|line| line.starts_with("88,")).count() > 2);

    bai2()
        .args(["parse", "-i", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 detail(s)"));
}

// ============================================================================
// Подкоманда format: JSON проекция
// ============================================================================

#[test]
fn format_writes_json_projection() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("statement.json");

    bai2()
        .args(["format", "--pretty", "-i", &fixture_arg("simple.txt"), "-o"])
        .arg(&output)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["sender"], "GSBI");
    assert_eq!(json["versionNumber"], 2);

    let account = &json["Groups"][0]["Accounts"][0];
    assert_eq!(account["accountNumber"], "107049924");
    assert_eq!(account["Details"][0]["text"], "WIRE IN");
    assert_eq!(account["Details"][0]["fundsType"]["type_code"], "0");
}

#[test]
fn format_compact_is_single_line() {
    bai2()
        .args(["format", "-i", &fixture_arg("simple.txt")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"sender\":\"GSBI\""))
        .stdout(predicate::function(|out: &str| out.lines().count() == 1));
}
