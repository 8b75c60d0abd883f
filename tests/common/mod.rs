#![allow(dead_code)]

use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

/// Writes one JSON command per line into a temp file the CLI can consume.
pub fn command_file(commands: &[Value]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for command in commands {
        writeln!(file, "{command}").unwrap();
    }
    file.flush().unwrap();
    file
}

pub fn set_owner(principal: &str) -> Value {
    json!({ "op": "set-owner", "principal": principal })
}

pub fn set_fee(amount: u64) -> Value {
    json!({ "op": "set-fee", "amount": amount })
}

/// A valid creation command; only the fields under test vary per call.
pub fn create(caller: &str, at: u64, description: &str) -> Value {
    json!({
        "op": "create",
        "caller": caller,
        "at": at,
        "description": description,
        "submission_deadline": at + 100,
        "evaluation_criteria": "Quality and Cost",
        "budget": 1_000_000,
        "eligibility_requirements": "Licensed Contractors",
        "tender_type": "open",
        "evaluation_method": "best-value",
        "contract_duration": 365,
        "location": "City Center",
        "currency": "STX",
        "min_bid": 500_000,
        "max_bid": 2_000_000,
        "start_date": at + 50,
        "end_date": at + 150,
        "award_criteria": "Technical Score 60%",
        "payment_terms": "30% Advance",
        "delivery_terms": "Within 6 Months",
    })
}

pub fn update(caller: &str, at: u64, id: u64, description: &str) -> Value {
    json!({
        "op": "update",
        "caller": caller,
        "at": at,
        "id": id,
        "description": description,
        "submission_deadline": at + 200,
        "budget": 2_000_000,
    })
}

pub fn count() -> Value {
    json!({ "op": "count" })
}

pub fn exists(description: &str) -> Value {
    json!({ "op": "exists", "description": description })
}
