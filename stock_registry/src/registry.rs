//! Registry façade over the list and the index.
//!
//! `Registry` is the call interface the dashboard talks to. Every add and remove
//! is applied to both structures, but nothing reconciles them afterwards:
//!
//! - the list keeps every added record, duplicates included;
//! - the index keeps only the first record per symbol;
//! - `search_record` and the list views read the list, `list_sorted` reads the index.
//!
//! A remove therefore reports the list outcome only; the index delete is a silent
//! no-op when the symbol is absent there.
use log::{debug, info};

use crate::index::RecordIndex;
use crate::list::{Iter, RecordList};
use crate::record::Record;

/// Pair of record structures mutated in lockstep.
#[derive(Default)]
pub struct Registry {
    list: RecordList,
    index: RecordIndex,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to both the list and the index.
    pub fn add_record(&mut self, symbol: &str, price: f64, volume: i64) {
        self.insert(Record::new(symbol, price, volume));
    }

    /// Add already-built records in order; returns how many were added.
    pub fn load_records<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = Record>,
    {
        let mut count = 0;
        for record in records {
            self.insert(record);
            count += 1;
        }
        info!("Loaded {} record(s) into the registry", count);
        count
    }

    /// Remove `symbol` from both structures.
    ///
    /// Returns whether the list held the symbol.
    pub fn remove_record(&mut self, symbol: &str) -> bool {
        let found = self.list.remove(symbol);
        if self.index.delete(symbol).is_none() {
            debug!("registry: {} absent from index", symbol);
        }
        found
    }

    /// Newest record with `symbol`, looked up in the list.
    pub fn search_record(&self, symbol: &str) -> Option<&Record> {
        self.list.find(symbol)
    }

    /// All records, newest first.
    pub fn list_all(&self) -> Iter<'_> {
        self.list.traverse_all()
    }

    /// The `count` newest records; zero or negative yields nothing.
    pub fn list_latest(&self, count: i64) -> Iter<'_> {
        let limit = if count <= 0 {
            0
        } else {
            usize::try_from(count).unwrap_or(usize::MAX)
        };
        self.list.for_each_from_head(limit)
    }

    /// Distinct symbols in ascending order.
    pub fn list_sorted(&self) -> impl Iterator<Item = &str> + '_ {
        self.index.symbols()
    }

    /// Read-only access to the insertion-ordered list.
    pub fn list(&self) -> &RecordList {
        &self.list
    }

    /// Read-only access to the symbol index.
    pub fn index(&self) -> &RecordIndex {
        &self.index
    }

    fn insert(&mut self, record: Record) {
        self.list.add(record.clone());
        self.index.insert(record);
    }
}
