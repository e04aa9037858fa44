//! End-to-end tests driving the `treasure-hunter` binary over stdin.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn th() -> Command {
    Command::cargo_bin("treasure-hunter").unwrap()
}

// ---------------------------------------------------------------------------
// presets
// ---------------------------------------------------------------------------

#[test]
fn presets_lists_every_mode() {
    th().arg("presets").assert().success().stdout(
        predicate::str::contains("normal")
            .and(predicate::str::contains("hard"))
            .and(predicate::str::contains("easy"))
            .and(predicate::str::contains("test"))
            .and(predicate::str::contains("forced-lose"))
            .and(predicate::str::contains("samurai"))
            .and(predicate::str::contains("sword for sale"))
            .and(predicate::str::contains("6 modes")),
    );
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_quits_with_farewell() {
    th().args(["play", "--name", "Ada", "--mode", "n"])
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Welcome to town, ada.")
                .and(predicate::str::contains("(H)unt for treasure"))
                .and(predicate::str::contains("Fare thee well, ada!"))
                .and(predicate::str::contains("game over")),
        );
}

#[test]
fn play_prompts_for_missing_name_and_mode() {
    th().arg("play")
        .write_stdin("Bob\nh\nx\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("What's your name, Hunter?")
                .and(predicate::str::contains("Hard mode? (e/n/h)"))
                .and(predicate::str::contains("bob has 20 gold"))
                .and(predicate::str::contains("Fare thee well, bob!")),
        );
}

#[test]
fn play_unknown_mode_falls_back_to_normal() {
    th().args(["play", "--name", "ada", "--mode", "nightmare"])
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ada has 20 gold"));
}

#[test]
fn play_rejects_invalid_tokens() {
    th().args(["play", "--name", "ada", "--mode", "n"])
        .write_stdin("q\nx\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("invalid option")
                .and(predicate::str::contains("game over")),
        );
}

#[test]
fn play_shop_lists_wares() {
    th().args(["play", "--name", "ada", "--mode", "n"])
        .write_stdin("b\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("rope: 4 gold"));
}

#[test]
fn play_test_mode_crosses_terrain() {
    th().args(["play", "--name", "ada", "--mode", "test"])
        .write_stdin("m\nx\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("to cross the")
                .and(predicate::str::contains("ada has 100 gold")),
        );
}

#[test]
fn play_ends_at_end_of_input() {
    th().args(["play", "--name", "ada", "--mode", "e"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("game over")
                .and(predicate::str::contains("Fare thee well").not()),
        );
}

#[test]
fn play_forced_lose_ends_in_ruin() {
    th().args(["play", "--name", "ada", "--mode", "lose"])
        .write_stdin("l\n".repeat(10))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You lost the brawl")
                .and(predicate::str::contains("game over")),
        );
}

#[test]
fn play_rejects_blank_name() {
    th().args(["play", "--name", "  ", "--mode", "n"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs a name"));
}
