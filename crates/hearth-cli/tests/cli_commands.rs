//! Tests for the `hearth` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PARTY: &str = r#"[
  {
    "name": "Valeros",
    "level": 5,
    "con_modifier": 2,
    "hit_points": { "value": 10, "max": 40 },
    "conditions": [{ "slug": "drained", "value": 2 }],
    "items": [
      {
        "name": "Wand of Heal",
        "type": "consumable",
        "category": "wand",
        "uses": { "value": 0, "max": 3 }
      }
    ]
  },
  {
    "name": "Goblin Warchanter",
    "kind": "npc",
    "level": 1,
    "hit_points": { "value": 2, "max": 16 }
  }
]"#;

/// Create a temp directory holding a party file.
fn party_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("party.json"), PARTY).unwrap();
    dir
}

fn hearth() -> Command {
    Command::cargo_bin("hearth").unwrap()
}

#[test]
fn rest_prints_summary() {
    let dir = party_dir();
    hearth()
        .args(["rest", "party.json", "--yes"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Valeros awakens well-rested."))
        .stdout(predicate::str::contains("  - Restored 10 Hit Points."))
        .stdout(predicate::str::contains("  - Wand charges restored."))
        .stdout(predicate::str::contains("  - Drained condition reduced."))
        .stdout(predicate::str::contains("Goblin Warchanter awakens").not());
}

#[test]
fn rest_declined_on_stdin() {
    let dir = party_dir();
    hearth()
        .args(["rest", "party.json"])
        .current_dir(dir.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nobody rested."))
        .stderr(predicate::str::contains("Rest for the Night"));
}

#[test]
fn rest_confirmed_on_stdin() {
    let dir = party_dir();
    hearth()
        .args(["rest", "party.json"])
        .current_dir(dir.path())
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Valeros awakens well-rested."));
}

#[test]
fn rest_json_output() {
    let dir = party_dir();
    let output = hearth()
        .args(["rest", "party.json", "--yes", "--json"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let messages: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let messages = messages.as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["author"], "gamemaster");
    assert_eq!(messages[0]["speaker"]["alias"], "Valeros");
}

#[test]
fn rest_writes_rested_party() {
    let dir = party_dir();
    hearth()
        .args(["rest", "party.json", "--yes", "--output", "rested.json"])
        .current_dir(dir.path())
        .assert()
        .success();

    let rested = fs::read_to_string(dir.path().join("rested.json")).unwrap();
    let rested: serde_json::Value = serde_json::from_str(&rested).unwrap();
    assert_eq!(rested[0]["hit_points"]["value"], 20);
    assert_eq!(rested[0]["conditions"][0]["value"], 1);
    assert_eq!(rested[1]["hit_points"]["value"], 2);
}

#[test]
fn rest_with_catalog_override() {
    let dir = party_dir();
    fs::write(
        dir.path().join("de.json"),
        r#"{ "Hearth.Rest.Message.Awakens": "{actor} wacht ausgeruht auf." }"#,
    )
    .unwrap();

    hearth()
        .args(["rest", "party.json", "--yes", "--catalog", "de.json"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Valeros wacht ausgeruht auf."));
}

#[test]
fn rest_rejects_bad_config() {
    let dir = party_dir();
    fs::write(dir.path().join("config.json"), r#"{ "author": "  " }"#).unwrap();

    hearth()
        .args(["rest", "party.json", "--yes", "--config", "config.json"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: "));
}

#[test]
fn rest_missing_party_file() {
    let dir = TempDir::new().unwrap();
    hearth()
        .args(["rest", "missing.json", "--yes"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read 'missing.json'"));
}

#[test]
fn rest_without_characters_warns() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("party.json"),
        r#"[{ "name": "Goblin", "kind": "npc", "level": 1, "hit_points": { "value": 1, "max": 6 } }]"#,
    )
    .unwrap();

    hearth()
        .args(["rest", "party.json", "--yes"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Nobody rested."))
        .stderr(predicate::str::contains("Select at least one player character"));
}

fn write_card(dir: &TempDir, faces: &str) -> std::path::PathBuf {
    let path = dir.path().join("card.json");
    fs::write(
        &path,
        format!(
            r#"{{
  "author_is_viewer": true,
  "rolls": [
    {{ "kind": "check", "total": 0, "terms": [{{ "faces": 20, "number": 1, "results": [{faces}] }}] }}
  ]
}}"#
        ),
    )
    .unwrap();
    path
}

#[test]
fn highlight_reports_success_failure_none() {
    let dir = TempDir::new().unwrap();
    for (faces, expected) in [
        (r#"{ "value": 20 }"#, "success"),
        (r#"{ "value": 1 }"#, "failure"),
        (r#"{ "value": 11 }"#, "none"),
    ] {
        let card = write_card(&dir, faces);
        hearth()
            .arg("highlight")
            .arg(&card)
            .assert()
            .success()
            .stdout(predicate::str::diff(format!("{expected}\n")));
    }
}

#[test]
fn highlight_rejects_bad_json() {
    let dir = TempDir::new().unwrap();
    let card = dir.path().join("card.json");
    fs::write(&card, "not json").unwrap();
    hearth()
        .arg("highlight")
        .arg(&card)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));
}
