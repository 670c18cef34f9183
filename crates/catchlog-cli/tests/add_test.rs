//! Entry-form tests for `catchlog add`.
//!
//! Verifies the validate-all-on-submit contract: every field is checked
//! independently, nothing is persisted on failure, and a successful add
//! writes exactly the persisted layout.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_add_logs_a_catch_and_persists_it() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["add", "--fish-type", "Largemouth Bass", "--size", "18.5"])
        .args(["--lure", "Spinnerbait", "--location", "Lake Erie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged Largemouth Bass: 18.5\""));

    assert!(fixture.catches_file().exists());

    let records = fixture.list_json(&[]);
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["fishType"], "Largemouth Bass");
    assert_eq!(records[0]["size"], 18.5);
    assert_eq!(records[0]["lure"], "Spinnerbait");
    assert_eq!(records[0]["location"], "Lake Erie");
    assert!(records[0]["id"].is_i64());
    assert!(records[0]["timestamp"].is_string());
}

#[test]
fn test_add_with_nothing_reports_every_field() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("add")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please select a fish type"))
        .stderr(predicate::str::contains("Please enter the size"))
        .stderr(predicate::str::contains("Please enter the lure used"))
        .stderr(predicate::str::contains("Please enter the location"));

    // Nothing was persisted.
    assert!(!fixture.catches_file().exists());
}

#[test]
fn test_add_reports_only_the_missing_field() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["add", "--fish-type", "Pike", "--size", "30"])
        .args(["--location", "Georgian Bay"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter the lure used"))
        .stderr(predicate::str::contains("fish type").not())
        .stderr(predicate::str::contains("Please enter the size").not())
        .stderr(predicate::str::contains("Please enter the location").not());
}

#[test]
fn test_add_rejects_nonpositive_or_unparseable_size() {
    let fixture = TestFixture::new();

    for bad in ["0", "-4", "big"] {
        fixture
            .command()
            .args(["add", "--fish-type", "Pike", "--size", bad])
            .args(["--lure", "Spoon", "--location", "Bay"])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "Please enter a valid size greater than 0",
            ));
    }

    assert!(!fixture.catches_file().exists());
}

#[test]
fn test_add_rejects_blank_lure_and_location() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["add", "--fish-type", "Rock Bass", "--size", "8"])
        .args(["--lure", "   ", "--location", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter the lure used"))
        .stderr(predicate::str::contains("Please enter the location"));
}

#[test]
fn test_add_unknown_fish_type_fails() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["add", "--fish-type", "Muskie", "--size", "40"])
        .args(["--lure", "Bucktail", "--location", "Lake of the Woods"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown fish type 'Muskie'"));
}

#[test]
fn test_add_json_outputs_the_stored_record() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .args(["--format", "json", "add", "--fish-type", "Smallmouth Bass"])
        .args(["--size", "17.25", "--lure", "Ned Rig", "--location", "Door County"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let record: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(record["fishType"], "Smallmouth Bass");
    assert_eq!(record["size"], 17.25);
}

#[test]
fn test_round_trip_preserves_records_and_ids() {
    let fixture = TestFixture::new();

    fixture.add_catch("Pike", "30", "Spoon", "Georgian Bay");
    fixture.add_catch("Rock Bass", "8.5", "Worm", "Dock");
    fixture.add_catch("Largemouth Bass", "19", "Frog", "Back bay");

    let first = fixture.list_json(&["--sort-by", "time"]);
    // A second invocation reloads the store from disk.
    let second = fixture.list_json(&["--sort-by", "time"]);
    assert_eq!(first, second);
    assert_eq!(first.as_array().unwrap().len(), 3);
}
