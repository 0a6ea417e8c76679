//! End-to-end scenarios for the registry and its two structures.

use std::collections::BTreeSet;

use stock_registry::{Record, RecordIndex, RecordList, Registry};

#[test]
fn add_find_remove_round_trip() {
    let mut list = RecordList::new();
    list.add(Record::new("AAPL", 150.0, 1000));

    let found = list.find("AAPL").expect("record present");
    assert_eq!(found.symbol, "AAPL");
    assert_eq!(found.price, 150.0);
    assert_eq!(found.volume, 1000);

    assert!(list.remove("AAPL"));
    assert!(list.find("AAPL").is_none());
}

#[test]
fn index_scenario_sorts_inserted_symbols() {
    let mut index = RecordIndex::new();
    for symbol in ["M", "B", "T", "A", "C"] {
        index.insert(Record::new(symbol, 0.0, 0));
    }
    let sorted: Vec<&str> = index.symbols().collect();
    assert_eq!(sorted, ["A", "B", "C", "M", "T"]);
}

#[test]
fn list_scenario_is_newest_first() {
    let mut registry = Registry::new();
    for symbol in ["X", "Y", "Z"] {
        registry.add_record(symbol, 1.0, 1);
    }
    let all: Vec<&str> = registry.list_all().map(Record::symbol).collect();
    let latest: Vec<&str> = registry.list_latest(2).map(Record::symbol).collect();
    assert_eq!(all, ["Z", "Y", "X"]);
    assert_eq!(latest, ["Z", "Y"]);
}

/// Small deterministic generator so the mixed workload is reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

#[test]
fn mixed_workload_matches_reference_set() {
    let mut rng = Lcg(42);
    let mut registry = Registry::new();
    let mut expected = BTreeSet::new();
    let mut added = Vec::new();

    for step in 0..2_000 {
        let symbol = format!("S{:02}", rng.next_u64() % 60);
        if rng.next_u64() % 3 == 0 {
            let before: Vec<String> = registry.list_sorted().map(String::from).collect();
            registry.remove_record(&symbol);
            if expected.remove(&symbol) {
                let after: Vec<String> = registry.list_sorted().map(String::from).collect();
                assert_eq!(after.len() + 1, before.len(), "step {step}");
            } else {
                let after: Vec<String> = registry.list_sorted().map(String::from).collect();
                assert_eq!(before, after, "step {step}");
            }
        } else {
            registry.add_record(&symbol, step as f64, step);
            added.push(symbol.clone());
            expected.insert(symbol);
        }

        let sorted: Vec<&str> = registry.list_sorted().collect();
        assert!(sorted.windows(2).all(|w| w[0] < w[1]), "step {step}");
        let want: Vec<&str> = expected.iter().map(String::as_str).collect();
        assert_eq!(sorted, want, "step {step}");
        assert_eq!(registry.index().len(), expected.len());
    }

    // list length = adds minus successful list removes, and newest-first order holds
    let volumes: Vec<i64> = registry.list_all().map(|r| r.volume).collect();
    assert!(volumes.windows(2).all(|w| w[0] > w[1]));
    assert!(registry.list().len() <= added.len());
}

#[test]
fn first_insert_wins_in_index() {
    let mut registry = Registry::new();
    registry.add_record("IBM", 120.0, 10);
    registry.add_record("IBM", 130.0, 20);
    let stored = registry.index().get("IBM").expect("indexed");
    assert_eq!((stored.price, stored.volume), (120.0, 10));
}
