//! End-to-end runs of the `mt` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `mt` with its store in `dir` and colours off.
fn mt(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mt").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("MT_LOG")
        .env_remove("RUST_LOG")
        .args(["--store", dir.path().to_str().unwrap()]);
    cmd
}

fn stored(dir: &TempDir, server: &str) -> serde_json::Value {
    let text = fs::read_to_string(dir.path().join(format!("{server}.json"))).unwrap();
    serde_json::from_str(&text).unwrap()
}

// ---------------------------------------------------------------------------
// games
// ---------------------------------------------------------------------------

#[test]
fn games_lists_builtin_systems() {
    let dir = TempDir::new().unwrap();
    mt(&dir)
        .arg("games")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("conan")
                .and(predicate::str::contains("Star Trek Adventures"))
                .and(predicate::str::contains("!hit"))
                .and(predicate::str::contains("6 systems")),
        );
}

#[test]
fn games_from_catalog_file() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("games.json");
    fs::write(
        &catalog,
        r#"{
            "Homebrew": {
                "display": "Homebrew 2d20",
                "images": { "d6": "d6.png", "d20": "d20.png" },
                "dice": {
                    "Weather": { "display": "Weather", "values": ["Rain", "Sun"] }
                }
            }
        }"#,
    )
    .unwrap();

    mt(&dir)
        .args(["--catalog", catalog.to_str().unwrap(), "games", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"homebrew\"")
                .and(predicate::str::contains("\"weather\"")),
        );
}

#[test]
fn games_fails_on_missing_catalog() {
    let dir = TempDir::new().unwrap();
    mt(&dir)
        .args(["--catalog", "/nonexistent/games.json", "games"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: failed to load catalog"));
}

// ---------------------------------------------------------------------------
// exec: game selection and dice
// ---------------------------------------------------------------------------

#[test]
fn dice_before_game_selection_asks_for_a_game() {
    let dir = TempDir::new().unwrap();
    mt(&dir)
        .args(["exec", "2d20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Game not set!"));
}

#[test]
fn game_is_remembered_per_server() {
    let dir = TempDir::new().unwrap();
    mt(&dir)
        .args(["exec", "!game", "fallout"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Game is now set to Fallout: The Roleplaying Game",
        ));

    mt(&dir)
        .args(["exec", "game"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Game is set to Fallout"));

    mt(&dir)
        .args(["--server", "other", "exec", "game"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Supported Games"));

    assert_eq!(stored(&dir, "local")["game"], "fallout");
}

#[test]
fn seeded_d20_roll_is_reproducible() {
    let dir = TempDir::new().unwrap();
    mt(&dir).args(["exec", "game", "conan"]).assert().success();

    let roll = |dir: &TempDir| {
        let output = mt(dir)
            .args(["--seed", "42", "exec", "--json", "3d20", "12"])
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };
    let first = roll(&dir);
    assert_eq!(first, roll(&dir));

    let value: serde_json::Value = serde_json::from_str(&first).unwrap();
    assert_eq!(value["report"]["description"], "d20 Roll Result");
    assert_eq!(value["report"]["fields"][0]["value"], "12");
}

#[test]
fn invalid_dice_count_fails() {
    let dir = TempDir::new().unwrap();
    mt(&dir).args(["exec", "game", "conan"]).assert().success();
    mt(&dir)
        .args(["exec", "xd6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: invalid dice count 'x'"));
}

#[test]
fn unknown_custom_command_lists_valid_ones() {
    let dir = TempDir::new().unwrap();
    mt(&dir).args(["exec", "game", "infinity"]).assert().success();
    mt(&dir)
        .args(["--user", "Tess", "exec", "loot"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("'loot' is not a game specific command!")
                .and(predicate::str::contains("d20, d6, hit are valid commands.")),
        );
}

// ---------------------------------------------------------------------------
// exec: pools
// ---------------------------------------------------------------------------

#[test]
fn momentum_here_then_status() {
    let dir = TempDir::new().unwrap();
    mt(&dir)
        .args(["--channel", "c1", "--channel-name", "general", "exec", "m", "add", "3", "here"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Momentum Pools")
                .and(predicate::str::contains("#general")),
        );

    let doc = stored(&dir, "local");
    assert_eq!(doc["c1"]["momentum"], 3);
    assert_eq!(doc["c1"]["name"], "general");
    assert_eq!(doc["global"]["momentum"], 0);

    mt(&dir)
        .args(["exec", "pool"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Momentum: 0. Threat: 0")
                .and(predicate::str::contains("Momentum: 3. Threat: 0")),
        );
}

#[test]
fn negative_amounts_pass_through() {
    let dir = TempDir::new().unwrap();
    mt(&dir)
        .args(["exec", "t", "set", "-2", "here"])
        .assert()
        .success();
    assert_eq!(stored(&dir, "local")["table"]["threat"], -2);
}

#[test]
fn reset_keeps_game_and_unknown_keys() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("local.json"),
        r#"{"global":{"momentum":4,"threat":2},"game":"dune","c1":{"momentum":1,"threat":1,"name":"general"},"schema":2}"#,
    )
    .unwrap();

    mt(&dir)
        .args(["--admin", "exec", "pool", "reset"])
        .assert()
        .success();

    let doc = stored(&dir, "local");
    assert_eq!(
        doc,
        serde_json::json!({
            "global": {"momentum": 0, "threat": 0},
            "game": "dune",
            "schema": 2
        })
    );
}

#[test]
fn corrupt_document_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("local.json"), "not json").unwrap();
    mt(&dir)
        .args(["exec", "pool"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt pool document for server local"));
}

// ---------------------------------------------------------------------------
// repl
// ---------------------------------------------------------------------------

#[test]
fn repl_runs_commands_until_quit() {
    let dir = TempDir::new().unwrap();
    mt(&dir)
        .arg("repl")
        .write_stdin("!t add 2\nxd20\npool\nquit\nm add 1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Threat Pools")
                .and(predicate::str::contains("invalid dice count"))
                .and(predicate::str::contains("Momentum: 0. Threat: 2")),
        );

    assert_eq!(stored(&dir, "local")["global"]["momentum"], 0);
}
