//! Scenario: seed files feed the in-memory store at boot.
//!
//! A file written from `GET /orders` output (`{ "data": [...] }`) loads back
//! into an `OrderService`; a missing file is an error with the path in it.

use std::io::Write;

use grubdash_orders::seed::load_seed_file;
use grubdash_orders::OrderService;
use grubdash_testkit::{envelope, sample_orders, PENDING_ID};

#[test]
fn seed_file_round_trips_into_service() {
    let orders = sample_orders();
    let body = envelope(serde_json::to_value(&orders).unwrap());

    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, "{body}").unwrap();

    let path = f.path().to_str().unwrap();
    let loaded = load_seed_file(path).unwrap();
    let svc = OrderService::in_memory(loaded);

    assert_eq!(svc.list(), orders);
    assert!(svc.read(PENDING_ID).is_ok());
}

#[test]
fn missing_seed_file_names_the_path() {
    let err = load_seed_file("/definitely/not/here.json").unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.json"));
}
