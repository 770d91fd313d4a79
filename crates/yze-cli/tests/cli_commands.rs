//! Integration tests for the yze CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn yze() -> Command {
    Command::cargo_bin("yze").unwrap()
}

/// Small, seeded run options appended to every odds command.
const QUICK: [&str; 4] = ["-t", "200", "--seed", "1"];

// ---------------------------------------------------------------------------
// mutant
// ---------------------------------------------------------------------------

#[test]
fn mutant_prints_odds_table() {
    yze()
        .args(["mutant", "-a", "3", "-s", "2", "-g", "1"])
        .args(QUICK)
        .assert()
        .success()
        .stdout(predicate::str::contains("throw successes"))
        .stdout(predicate::str::contains("push attr botches"))
        .stdout(predicate::str::contains("seed=1"));
}

#[test]
fn mutant_json_report() {
    yze()
        .args(["mutant", "-a", "2", "--json"])
        .args(QUICK)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"variant\": \"mutant\""))
        .stdout(predicate::str::contains("\"trials\": 200"));
}

#[test]
fn same_seed_same_report() {
    let first = yze()
        .args(["mutant", "-a", "4", "-g", "2", "--json"])
        .args(QUICK)
        .output()
        .unwrap();
    let second = yze()
        .args(["mutant", "-a", "4", "-g", "2", "--json"])
        .args(QUICK)
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn zero_trials_fails() {
    yze()
        .args(["mutant", "-t", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

// ---------------------------------------------------------------------------
// forbidden-lands
// ---------------------------------------------------------------------------

#[test]
fn forbidden_lands_with_artefact_and_multipush() {
    yze()
        .args([
            "forbidden-lands",
            "-a",
            "2",
            "-s",
            "1",
            "--artefact",
            "10",
            "-m",
            "2",
        ])
        .args(QUICK)
        .assert()
        .success()
        .stdout(predicate::str::contains("push artefact successes"))
        .stdout(predicate::str::contains("multipush successes"));
}

#[test]
fn forbidden_lands_accepts_die_tag() {
    yze()
        .args(["forbidden-lands", "-a", "2", "--artefact", "D12"])
        .args(QUICK)
        .assert()
        .success()
        .stdout(predicate::str::contains("d12 artefact"))
        .stdout(predicate::str::contains("push artefact successes"));
}

#[test]
fn forbidden_lands_rejects_bad_artefact() {
    yze()
        .args(["forbidden-lands", "--artefact", "7"])
        .args(QUICK)
        .assert()
        .failure()
        .stderr(predicate::str::contains("die size"));
}

// ---------------------------------------------------------------------------
// alien
// ---------------------------------------------------------------------------

#[test]
fn alien_with_stress() {
    yze()
        .args(["alien", "-p", "4", "-S", "2", "-m"])
        .args(QUICK)
        .assert()
        .success()
        .stdout(predicate::str::contains("throw stress ones"))
        .stdout(predicate::str::contains("multipush stress ones"));
}

// ---------------------------------------------------------------------------
// twilight
// ---------------------------------------------------------------------------

#[test]
fn twilight_with_hit_locations() {
    yze()
        .args([
            "twilight",
            "--attr",
            "B",
            "--skill",
            "c",
            "--ammo",
            "3",
            "--hit-location",
        ])
        .args(QUICK)
        .assert()
        .success()
        .stdout(predicate::str::contains("push ammo ones"))
        .stdout(predicate::str::contains("Torso"));
}

#[test]
fn twilight_rejects_bad_rating() {
    yze()
        .args(["twilight", "--attr", "E"])
        .args(QUICK)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid rating"));
}

// ---------------------------------------------------------------------------
// blade-runner
// ---------------------------------------------------------------------------

#[test]
fn blade_runner_with_advantage() {
    yze()
        .args([
            "blade-runner",
            "--attr",
            "A",
            "--skill",
            "D",
            "--advantage",
            "--even-one",
        ])
        .args(QUICK)
        .assert()
        .success()
        .stdout(predicate::str::contains("advantage"));
}

#[test]
fn blade_runner_edge_flags_conflict() {
    yze()
        .args(["blade-runner", "--advantage", "--disadvantage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

// ---------------------------------------------------------------------------
// push-odds
// ---------------------------------------------------------------------------

#[test]
fn push_odds_from_faces() {
    yze()
        .args(["push-odds", "-a", "253", "-s", "46", "-g", "31"])
        .args(QUICK)
        .assert()
        .success()
        .stdout(predicate::str::contains("push successes"));
}

#[test]
fn push_odds_rejects_out_of_range_face() {
    yze()
        .args(["push-odds", "-a", "27"])
        .args(QUICK)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid attr value 7"));
}

#[test]
fn push_odds_rejects_non_digit() {
    yze()
        .args(["push-odds", "-a", "2x"])
        .args(QUICK)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a digit"));
}
