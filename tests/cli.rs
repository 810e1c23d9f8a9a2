//! End-to-end checks over the binary. The api env vars are cleared so every
//! run serves the bundled mock dataset.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn goalboard() -> Command {
    let mut cmd = cargo_bin_cmd!("goalboard");
    cmd.env_remove("GOALBOARD_API_BASE_URL");
    cmd.env_remove("GOALBOARD_FIXTURES_API");
    cmd
}

#[test]
fn leagues_honors_the_json_flag() {
    goalboard()
        .args(["leagues", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("\"Premier League\""))
        .stdout(predicate::str::contains("\"LaLiga\""));
}

#[test]
fn countries_honors_the_json_flag() {
    goalboard()
        .args(["countries", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("\"Spain\""))
        .stdout(predicate::str::contains("\"England\""));
}

#[test]
fn leagues_text_output_lists_a_header() {
    goalboard()
        .arg("leagues")
        .assert()
        .success()
        .stdout(predicate::str::contains("Leagues:"))
        .stdout(predicate::str::contains("Premier League"));
}

#[test]
fn unknown_market_key_is_an_error() {
    goalboard()
        .args(["market", "over9_5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown market key"));
}
