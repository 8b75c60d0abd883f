use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::process::Command;

mod common;

#[test]
fn test_create_flow() {
    let file = common::command_file(&[
        common::set_owner("ST2TEST"),
        common::set_fee(5000),
        common::create("ST1TEST", 0, "Road Construction"),
        common::count(),
        common::exists("Road Construction"),
    ]);

    let mut cmd = Command::new(cargo_bin!("tender-registry"));
    cmd.arg(file.path()).arg("--agency").arg("ST1TEST");

    cmd.assert()
        .success()
        // set-owner, set-fee, create id 0, count 1, exists true
        .stdout(predicate::str::contains("{\"ok\":true}"))
        .stdout(predicate::str::contains("{\"ok\":0}"))
        .stdout(predicate::str::contains("{\"ok\":1}"))
        // Final snapshot row.
        .stdout(predicate::str::contains(
            "0,Road Construction,100,1000000,ST1TEST,open,best-value,City Center,STX,true",
        ));
}

#[test]
fn test_update_flow() {
    let file = common::command_file(&[
        common::set_owner("ST2TEST"),
        common::create("ST1TEST", 0, "Old Tender"),
        common::update("ST1TEST", 5, 0, "New Tender"),
        json!({ "op": "get", "id": 0 }),
        json!({ "op": "get-update", "id": 0 }),
        common::exists("Old Tender"),
        common::exists("New Tender"),
    ]);

    let mut cmd = Command::new(cargo_bin!("tender-registry"));
    cmd.arg(file.path()).arg("--agency").arg("ST1TEST");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"description\":\"New Tender\""))
        .stdout(predicate::str::contains("\"updater\":\"ST1TEST\""))
        // Old description freed, new one indexed.
        .stdout(predicate::str::contains("{\"ok\":false}"))
        .stdout(predicate::str::contains(
            "0,New Tender,205,2000000,ST1TEST,open,best-value,City Center,STX,true",
        ));
}

#[test]
fn test_duplicate_description_rejected() {
    let file = common::command_file(&[
        common::set_owner("ST2TEST"),
        common::create("ST1TEST", 0, "Road Construction"),
        common::create("ST1TEST", 0, "Road Construction"),
        common::count(),
    ]);

    let mut cmd = Command::new(cargo_bin!("tender-registry"));
    cmd.arg(file.path()).arg("--agency").arg("ST1TEST");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("{\"err\":106}"))
        .stdout(predicate::str::contains("{\"ok\":1}"));
}

#[test]
fn test_missing_tender_reads_return_null() {
    let file = common::command_file(&[
        json!({ "op": "get", "id": 42 }),
        json!({ "op": "get-update", "id": 42 }),
        common::exists("NonExistent"),
    ]);

    let mut cmd = Command::new(cargo_bin!("tender-registry"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("{\"ok\":null}"))
        .stdout(predicate::str::contains("{\"ok\":false}"));
}

#[test]
fn test_malformed_command_lines_are_skipped() {
    let mut file = common::command_file(&[
        common::set_owner("ST2TEST"),
        common::create("ST1TEST", 0, "Road Construction"),
    ]);
    use std::io::Write;
    writeln!(file, "not json").unwrap();
    writeln!(file, "{}", common::count()).unwrap();
    file.flush().unwrap();

    let mut cmd = Command::new(cargo_bin!("tender-registry"));
    cmd.arg(file.path()).arg("--agency").arg("ST1TEST");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading command"))
        .stdout(predicate::str::contains("{\"ok\":1}"));
}
