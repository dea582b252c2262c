// Regression tests: ensure the CLI runs missions end to end and renders
// errors with miette diagnostics.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn cli_runs_a_mission_file() {
    let mission = "tests/run_mission.txt";
    fs::write(mission, "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM").unwrap();

    let mut cmd = Command::cargo_bin("mars-rover").unwrap();
    cmd.arg("run").arg(mission);
    cmd.assert()
        .success()
        .stdout(contains("1 3 N").and(contains("5 1 E")));

    let _ = fs::remove_file(mission);
}

#[test]
fn cli_reports_miette_diagnostics_on_error() {
    let bad_mission = "tests/bad_mission.txt";
    fs::write(bad_mission, "5 5\n1 2 X\nLMLM" /* bad heading */).unwrap();

    let mut cmd = Command::cargo_bin("mars-rover").unwrap();
    cmd.arg("run").arg(bad_mission);
    cmd.assert()
        .failure()
        .stderr(contains("rover::execute::direction_not_valid"));

    let _ = fs::remove_file(bad_mission);
}

#[test]
fn cli_interpret_emits_instruction_json() {
    let mission = "tests/interpret_mission.txt";
    fs::write(mission, "5 5\n1 2 N\nLMR").unwrap();

    let mut cmd = Command::cargo_bin("mars-rover").unwrap();
    cmd.arg("interpret").arg(mission);
    cmd.assert()
        .success()
        .stdout(contains("\"plateau\"").and(contains("\"commands\"")));

    let _ = fs::remove_file(mission);
}

#[test]
fn cli_validate_reports_ok_for_a_valid_mission() {
    let mission = "tests/validate_mission.txt";
    fs::write(mission, "5 5\n0 0 N\nM").unwrap();

    let mut cmd = Command::cargo_bin("mars-rover").unwrap();
    cmd.arg("validate").arg(mission);
    cmd.assert().success().stdout(contains("ok:"));

    let _ = fs::remove_file(mission);
}

#[test]
fn cli_validate_fails_on_structural_errors() {
    let bad_mission = "tests/validate_bad_mission.txt";
    fs::write(bad_mission, "5 5\n1 2 N" /* missing command line */).unwrap();

    let mut cmd = Command::cargo_bin("mars-rover").unwrap();
    cmd.arg("validate").arg(bad_mission);
    cmd.assert()
        .failure()
        .stderr(contains("rover::interpret::input_not_valid"));

    let _ = fs::remove_file(bad_mission);
}

#[test]
fn cli_demo_prints_the_canonical_mission() {
    let mut cmd = Command::cargo_bin("mars-rover").unwrap();
    cmd.arg("demo");
    cmd.assert()
        .success()
        .stdout(contains("INPUT").and(contains("OUTPUT")).and(contains("5 1 E")));
}

#[test]
fn cli_reports_missing_files() {
    let mut cmd = Command::cargo_bin("mars-rover").unwrap();
    cmd.arg("run").arg("tests/no_such_mission.txt");
    cmd.assert()
        .failure()
        .stderr(contains("rover::file-system::input_not_valid"));
}
