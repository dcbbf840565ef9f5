//! Integration tests for operation dispatch over an in-memory ledger.

use flatledger_core::{error_codes, Contract, Flat, Ledger, MemoryLedger, Response};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn decode(response: &Response) -> Flat {
    assert!(response.is_ok(), "unexpected failure: {:?}", response.message());
    serde_json::from_slice(&response.payload).unwrap()
}

fn seeded() -> MemoryLedger {
    let ledger = MemoryLedger::new();
    let response = Contract::new(&ledger).invoke("seedInitialData", &[]);
    assert!(response.is_ok());
    assert!(response.payload.is_empty());
    ledger
}

#[test]
fn test_init_writes_nothing() {
    let ledger = MemoryLedger::new();
    let response = Contract::new(&ledger).init();

    assert!(response.is_ok());
    assert!(response.payload.is_empty());
    assert!(ledger.is_empty());
}

#[test]
fn test_create_then_query_roundtrip() {
    let ledger = MemoryLedger::new();
    let contract = Contract::new(&ledger);

    let response = contract.invoke(
        "create",
        &args(&["42", "T012", "1493517025", "58.0148, 59.01391", "Helal"]),
    );
    assert!(response.is_ok());

    let flat = decode(&contract.invoke("query", &args(&["42"])));
    assert_eq!(flat, Flat::new("T012", "1493517025", "58.0148, 59.01391", "Helal"));

    // Ranking precedes location in the argument list
    assert_eq!(flat.condition, "T012");
    assert_eq!(flat.ranking, "1493517025");
    assert_eq!(flat.location, "58.0148, 59.01391");
    assert_eq!(flat.holder, "Helal");
}

#[test]
fn test_query_unknown_key() {
    let ledger = seeded();
    let response = Contract::new(&ledger).invoke("query", &args(&["11"]));

    assert_eq!(response.code(), Some(error_codes::NOT_FOUND));
    assert!(response.message().unwrap().contains("11"));
}

#[test]
fn test_query_wrong_arity() {
    let ledger = seeded();
    let contract = Contract::new(&ledger);

    for bad in [args(&[]), args(&["1", "2"])] {
        let response = contract.invoke("query", &bad);
        assert_eq!(response.code(), Some(error_codes::INVALID_ARGUMENT_COUNT));
    }
}

#[test]
fn test_seed_contents() {
    let ledger = seeded();
    let contract = Contract::new(&ledger);

    let first = decode(&contract.invoke("query", &args(&["1"])));
    assert_eq!(first.holder, "Marjan");
    assert_eq!(first.condition, "923F");

    let last = decode(&contract.invoke("query", &args(&["10"])));
    assert_eq!(last.holder, "Fatima");

    assert_eq!(ledger.len(), 10);
}

#[test]
fn test_seed_overwrites_existing_keys() {
    let ledger = MemoryLedger::new();
    let contract = Contract::new(&ledger);
    contract.invoke("create", &args(&["1", "a", "b", "c", "Someone"]));

    contract.invoke("seedInitialData", &[]);

    assert_eq!(decode(&contract.invoke("query", &args(&["1"]))).holder, "Marjan");
}

#[test]
fn test_seed_rejects_arguments() {
    let ledger = MemoryLedger::new();
    let response = Contract::new(&ledger).invoke("seedInitialData", &args(&["x"]));

    assert_eq!(response.code(), Some(error_codes::INVALID_ARGUMENT_COUNT));
    assert!(ledger.is_empty());
}

#[test]
fn test_update_holder_changes_only_holder() {
    let ledger = seeded();
    let contract = Contract::new(&ledger);
    let before = decode(&contract.invoke("query", &args(&["4"])));

    assert!(contract.invoke("updateHolder", &args(&["4", "X"])).is_ok());

    let after = decode(&contract.invoke("query", &args(&["4"])));
    assert_eq!(after.holder, "X");
    assert_eq!(after.condition, before.condition);
    assert_eq!(after.ranking, before.ranking);
    assert_eq!(after.location, before.location);
}

#[test]
fn test_update_condition_and_ranking() {
    let ledger = seeded();
    let contract = Contract::new(&ledger);

    assert!(contract.invoke("updateCondition", &args(&["2", "ZZ99"])).is_ok());
    assert!(contract.invoke("updateRanking", &args(&["2", "7"])).is_ok());

    let flat = decode(&contract.invoke("query", &args(&["2"])));
    assert_eq!(flat, Flat::new("ZZ99", "7", "91.2395, -49.4594", "Som"));
}

#[test]
fn test_update_wrong_arity_writes_nothing() {
    let ledger = seeded();
    let contract = Contract::new(&ledger);
    let before = ledger.snapshot();

    for name in ["updateHolder", "updateCondition", "updateRanking"] {
        for bad in [args(&["1"]), args(&["1", "X", "Y"])] {
            let response = contract.invoke(name, &bad);
            assert_eq!(response.code(), Some(error_codes::INVALID_ARGUMENT_COUNT));
        }
    }

    assert_eq!(ledger.snapshot(), before);
}

#[test]
fn test_create_and_list_wrong_arity_writes_nothing() {
    let ledger = seeded();
    let contract = Contract::new(&ledger);
    let before = ledger.snapshot();

    for bad in [
        args(&["11", "923F", "1504054225", "1, 2"]),
        args(&["11", "923F", "1504054225", "1, 2", "Som", "extra"]),
        args(&[]),
    ] {
        let response = contract.invoke("create", &bad);
        assert_eq!(response.code(), Some(error_codes::INVALID_ARGUMENT_COUNT));
        assert!(response.payload.is_empty());
    }

    let response = contract.invoke("listAll", &args(&["0"]));
    assert_eq!(response.code(), Some(error_codes::INVALID_ARGUMENT_COUNT));
    assert!(response.payload.is_empty());

    assert_eq!(ledger.snapshot(), before);
    assert_eq!(ledger.get("11").unwrap(), None);
    assert_eq!(ledger.open_scans(), 0);
}

#[test]
fn test_update_missing_key() {
    let ledger = seeded();
    let response = Contract::new(&ledger).invoke("updateRanking", &args(&["77", "1"]));

    assert_eq!(response.code(), Some(error_codes::NOT_FOUND));
    assert_eq!(ledger.get("77").unwrap(), None);
}

#[test]
fn test_create_overwrites_prior_update() {
    let ledger = seeded();
    let contract = Contract::new(&ledger);

    contract.invoke("updateHolder", &args(&["3", "Temporary"]));
    contract.invoke("create", &args(&["3", "T012", "1", "0, 0", "Helal"]));

    let flat = decode(&contract.invoke("query", &args(&["3"])));
    assert_eq!(flat, Flat::new("T012", "1", "0, 0", "Helal"));
}

#[test]
fn test_create_write_failure() {
    let ledger = MemoryLedger::new();
    ledger.fail_puts(true);
    let response =
        Contract::new(&ledger).invoke("create", &args(&["9", "a", "b", "c", "d"]));

    assert_eq!(response.code(), Some(error_codes::PERSISTENCE));
    assert_eq!(response.message(), Some("failed to record flat: 9"));
}

#[test]
fn test_list_all_after_seed() {
    let ledger = seeded();
    let contract = Contract::new(&ledger);

    let response = contract.invoke("listAll", &[]);
    assert!(response.is_ok());

    let entries: Vec<serde_json::Value> = serde_json::from_slice(&response.payload).unwrap();
    assert_eq!(entries.len(), 10);

    let seeds = flatledger_core::seed_flats();
    for entry in &entries {
        let key = entry["Key"].as_str().unwrap();
        let index: usize = key.parse().unwrap();
        assert!((1..=10).contains(&index));

        let record: Flat = serde_json::from_value(entry["Record"].clone()).unwrap();
        assert_eq!(record, seeds[index - 1]);
    }

    assert_eq!(contract.invoke("listAll", &[]), response);
    assert_eq!(ledger.open_scans(), 0);
}

#[test]
fn test_list_all_scan_failure() {
    let ledger = seeded();
    let contract = Contract::new(&ledger);

    ledger.fail_scan_start(true);
    let response = contract.invoke("listAll", &[]);
    assert_eq!(response.code(), Some(error_codes::SCAN));
    assert!(response.payload.is_empty());

    ledger.fail_scan_start(false);
    ledger.fail_scan_after(Some(4));
    let response = contract.invoke("listAll", &[]);
    assert_eq!(response.code(), Some(error_codes::SCAN));
    assert!(response.payload.is_empty());
    assert_eq!(ledger.open_scans(), 0);
}

#[test]
fn test_unknown_operation() {
    let ledger = seeded();
    let contract = Contract::new(&ledger);
    let before = ledger.snapshot();

    for name in ["queryFlat", "Query", "delete", ""] {
        let response = contract.invoke(name, &args(&["1"]));
        assert_eq!(response.code(), Some(error_codes::UNKNOWN_OPERATION));
    }

    assert_eq!(ledger.snapshot(), before);
}

#[test]
fn test_free_invoke() {
    let ledger = MemoryLedger::new();
    let response = flatledger_core::invoke(&ledger, "seedInitialData", &[]);

    assert!(response.is_ok());
    assert_eq!(ledger.len(), 10);
}
