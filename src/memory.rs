//! In-memory reference implementation of the host store.

use std::collections::BTreeMap;

use crate::store::StateStore;

/// `BTreeMap`-backed [`StateStore`], the reference host used by this
/// crate's tests. Values are whole encoded records; `set` is a plain
/// upsert, matching the durability model the ledger assumes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, Vec<u8>>,
    last_ord: u64,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Highest ordinal seen across all writes, 0 before the first write.
    pub fn last_ordinal(&self) -> u64 {
        self.last_ord
    }
}

impl StateStore for MemoryStore {
    fn get_last(&self, key: &str) -> Option<Vec<u8>> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, ord: u64, key: String, value: Vec<u8>) {
        self.last_ord = self.last_ord.max(ord);
        self.values.insert(key, value);
    }
}
