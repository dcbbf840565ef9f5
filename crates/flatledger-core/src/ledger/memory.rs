//! In-memory ledger implementation.
//!
//! [`MemoryLedger`] keeps the world state in a [`BTreeMap`] so range scans
//! come back in lexical key order, the same order a host ledger yields.
//! It stands in for the host in tests and supports fault injection:
//!
//! | Fault | Effect |
//! |-------|--------|
//! | [`fail_gets`](MemoryLedger::fail_gets) | every `get` returns an error |
//! | [`fail_puts`](MemoryLedger::fail_puts) | every `put` returns an error and stores nothing |
//! | [`fail_scan_start`](MemoryLedger::fail_scan_start) | `range_scan` fails before yielding |
//! | [`fail_scan_after`](MemoryLedger::fail_scan_after) | a scan yields N items, then an error |
//!
//! Open scans are counted so tests can check every handle was released.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use super::{KeyValue, Ledger, LedgerError};

#[derive(Debug, Default)]
struct Faults {
    fail_gets: bool,
    fail_puts: bool,
    fail_scan_start: bool,
    fail_scan_after: Option<usize>,
}

#[derive(Debug, Default)]
struct Inner {
    data: RwLock<BTreeMap<String, Vec<u8>>>,
    faults: RwLock<Faults>,
    open_scans: AtomicUsize,
}

/// Ordered in-memory ledger.
///
/// Cloning shares the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    inner: Arc<Inner>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.data.read().len()
    }

    /// Check if the ledger holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.data.read().is_empty()
    }

    /// Copy of the full world state, for comparing before and after a call.
    pub fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        self.inner.data.read().clone()
    }

    /// Number of scans currently open.
    pub fn open_scans(&self) -> usize {
        self.inner.open_scans.load(Ordering::SeqCst)
    }

    /// Make every `get` fail.
    pub fn fail_gets(&self, fail: bool) {
        self.inner.faults.write().fail_gets = fail;
    }

    /// Make every `put` fail.
    pub fn fail_puts(&self, fail: bool) {
        self.inner.faults.write().fail_puts = fail;
    }

    /// Make `range_scan` fail before returning a handle.
    pub fn fail_scan_start(&self, fail: bool) {
        self.inner.faults.write().fail_scan_start = fail;
    }

    /// Make scans fail after yielding `items` entries. None disables the fault.
    pub fn fail_scan_after(&self, items: Option<usize>) {
        self.inner.faults.write().fail_scan_after = items;
    }
}

impl Ledger for MemoryLedger {
    type Scan<'a> = MemoryScan<'a>;

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        if self.inner.faults.read().fail_gets {
            return Err(LedgerError::Unavailable(format!("injected get failure: {key}")));
        }
        Ok(self.inner.data.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        if self.inner.faults.read().fail_puts {
            return Err(LedgerError::Unavailable(format!("injected put failure: {key}")));
        }
        self.inner.data.write().insert(key.to_string(), value);
        Ok(())
    }

    fn range_scan(&self, start: &str, end: &str) -> Result<MemoryScan<'_>, LedgerError> {
        let (fail_start, fail_after) = {
            let faults = self.inner.faults.read();
            (faults.fail_scan_start, faults.fail_scan_after)
        };
        if fail_start {
            return Err(LedgerError::Unavailable("injected scan failure".to_string()));
        }

        // Snapshot the range so the scan is isolated from later writes
        let entries: Vec<KeyValue> = if start < end {
            self.inner
                .data
                .read()
                .range::<str, _>((Bound::Included(start), Bound::Excluded(end)))
                .map(|(key, value)| KeyValue {
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        self.inner.open_scans.fetch_add(1, Ordering::SeqCst);
        Ok(MemoryScan {
            entries: entries.into_iter(),
            fail_after,
            yielded: 0,
            failed: false,
            open_scans: &self.inner.open_scans,
        })
    }
}

/// Range scan over a [`MemoryLedger`]. Released on drop.
pub struct MemoryScan<'a> {
    entries: std::vec::IntoIter<KeyValue>,
    fail_after: Option<usize>,
    yielded: usize,
    failed: bool,
    open_scans: &'a AtomicUsize,
}

impl Iterator for MemoryScan<'_> {
    type Item = Result<KeyValue, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if self.fail_after == Some(self.yielded) {
            self.failed = true;
            return Some(Err(LedgerError::Unavailable(format!(
                "injected scan failure after {} items",
                self.yielded
            ))));
        }

        let entry = self.entries.next()?;
        self.yielded += 1;
        Some(Ok(entry))
    }
}

impl Drop for MemoryScan<'_> {
    fn drop(&mut self) {
        self.open_scans.fetch_sub(1, Ordering::SeqCst);
    }
}
