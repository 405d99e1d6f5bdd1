//! End-to-end tests for the quorum binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn quorum() -> Command {
    Command::cargo_bin("quorum").unwrap()
}

#[test]
fn plan_moves_labour_day_collision_a_week_earlier() {
    quorum()
        .args([
            "plan",
            "--nth",
            "4",
            "--weekday",
            "mon",
            "--year",
            "2015",
            "--adjust=-7",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2015-10-19"))
        .stdout(predicate::str::contains("moved by -7 days"));
}

#[test]
fn plan_without_adjustments_keeps_colliding_date() {
    quorum()
        .args([
            "plan", "--nth", "4", "--weekday", "mon", "--year", "2015", "--format", "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2015-10-26"))
        .stdout(predicate::str::contains("no adjustment policy"));
}

#[test]
fn plan_supports_backward_ordinals() {
    quorum()
        .args([
            "plan",
            "--nth=-1",
            "--weekday",
            "fri",
            "--year",
            "2014",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2014-12-26"));
}

#[test]
fn holidays_lists_mondayized_anzac_day() {
    quorum()
        .args(["holidays", "--year", "2015", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Anzac Day"))
        .stdout(predicate::str::contains("2015-04-27"));
}

#[test]
fn rejects_unknown_weekday() {
    quorum()
        .args(["plan", "--nth", "4", "--weekday", "frisday", "--year", "2015"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid weekday"));
}

#[test]
fn rejects_out_of_range_ordinal() {
    quorum()
        .args(["plan", "--nth", "5", "--weekday", "mon", "--year", "2015"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid ordinal"));
}

#[test]
fn rejects_unsupported_year() {
    quorum()
        .args(["plan", "--nth", "4", "--weekday", "mon", "--year", "1999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported year"));
}
