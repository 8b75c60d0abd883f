use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_create_requires_verified_agency() {
    let file = common::command_file(&[
        common::set_owner("ST2TEST"),
        common::create("ST2FAKE", 0, "Bridge Project"),
        common::count(),
    ]);

    let mut cmd = Command::new(cargo_bin!("tender-registry"));
    // ST2FAKE is not on the allow list.
    cmd.arg(file.path()).arg("--agency").arg("ST1TEST");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("{\"err\":100}"))
        .stdout(predicate::str::contains("{\"ok\":0}"));
}

#[test]
fn test_create_requires_configured_owner() {
    let file = common::command_file(&[
        common::create("ST1TEST", 0, "NoAuth Tender"),
        common::count(),
        common::exists("NoAuth Tender"),
    ]);

    let mut cmd = Command::new(cargo_bin!("tender-registry"));
    cmd.arg(file.path()).arg("--agency").arg("ST1TEST");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("{\"err\":109}"))
        .stdout(predicate::str::contains("{\"ok\":0}"))
        .stdout(predicate::str::contains("{\"ok\":false}"));
}

#[test]
fn test_update_is_creator_only() {
    let file = common::command_file(&[
        common::set_owner("ST2TEST"),
        common::create("ST1TEST", 0, "Test Tender"),
        common::update("ST3AGENCY", 5, 0, "Hijacked"),
        common::exists("Test Tender"),
    ]);

    let mut cmd = Command::new(cargo_bin!("tender-registry"));
    // ST3AGENCY is a verified agency, but not the creator of tender 0.
    cmd.arg(file.path())
        .arg("--agency")
        .arg("ST1TEST")
        .arg("--agency")
        .arg("ST3AGENCY");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("{\"err\":100}"))
        .stdout(predicate::str::contains(
            "0,Test Tender,100,1000000,ST1TEST,open,best-value,City Center,STX,true",
        ));
}

#[test]
fn test_owner_configuration_rules() {
    let file = common::command_file(&[
        common::set_fee(10_000),
        serde_json::json!({ "op": "set-owner", "principal": "SP000000000000000000002Q6VF78" }),
        common::set_owner("ST2TEST"),
        common::set_owner("ST3TEST"),
    ]);

    let mut cmd = Command::new(cargo_bin!("tender-registry"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        // Fee before owner, burn owner, then a second owner set.
        .stdout(predicate::str::contains("{\"err\":109}"))
        .stdout(predicate::str::contains("{\"err\":112}"))
        .stdout(predicate::str::contains("{\"ok\":true}"))
        .stdout(predicate::str::contains("{\"err\":108}"));
}
