//! Sled-backed ledger for running the contract outside a peer.

use sled::{Db, Tree};

use super::{KeyValue, Ledger, LedgerConfig, LedgerError};

/// Tree name for the world state.
const STATE_TREE: &str = "world_state";

/// A [`Ledger`] over a sled tree.
///
/// Keys are stored as their UTF-8 bytes, so sled's byte ordering is the
/// lexical key ordering the contract expects from range scans.
pub struct SledLedger {
    /// The underlying sled database.
    db: Db,

    /// Tree holding the current value of every key.
    state_tree: Tree,
}

impl SledLedger {
    /// Open or create a ledger with the given configuration.
    pub fn open(config: LedgerConfig) -> Result<Self, LedgerError> {
        let db = config.to_sled_config().open()?;
        let state_tree = db.open_tree(STATE_TREE)?;

        Ok(Self { db, state_tree })
    }

    /// Check if the ledger was recovered from a previous crash.
    pub fn was_recovered(&self) -> bool {
        self.db.was_recovered()
    }

    /// Number of keys in the world state.
    pub fn len(&self) -> usize {
        self.state_tree.len()
    }

    /// Check if the world state is empty.
    pub fn is_empty(&self) -> bool {
        self.state_tree.is_empty()
    }

    /// Flush all pending writes to disk.
    pub fn flush(&self) -> Result<(), LedgerError> {
        self.db.flush()?;
        Ok(())
    }

    /// Get ledger size in bytes.
    pub fn size_on_disk(&self) -> Result<u64, LedgerError> {
        Ok(self.db.size_on_disk()?)
    }
}

impl Ledger for SledLedger {
    type Scan<'a> = SledScan;

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.state_tree.get(key.as_bytes())?.map(|v| v.to_vec()))
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        self.state_tree.insert(key.as_bytes(), value)?;
        Ok(())
    }

    fn range_scan(&self, start: &str, end: &str) -> Result<SledScan, LedgerError> {
        // sled panics on an inverted range
        if start >= end {
            return Ok(SledScan { iter: None });
        }

        let iter = self.state_tree.range(start.as_bytes()..end.as_bytes());
        Ok(SledScan { iter: Some(iter) })
    }
}

/// Range scan over a [`SledLedger`].
pub struct SledScan {
    iter: Option<sled::Iter>,
}

impl Iterator for SledScan {
    type Item = Result<KeyValue, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.iter.as_mut()?.next()?;
        Some(result.map_err(LedgerError::from).and_then(|(key, value)| {
            let key = String::from_utf8(key.to_vec())
                .map_err(|e| LedgerError::InvalidKey(e.to_string()))?;
            Ok(KeyValue {
                key,
                value: value.to_vec(),
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestLedger {
        ledger: SledLedger,
        _dir: tempfile::TempDir, // Keep the temp dir alive
    }

    impl std::ops::Deref for TestLedger {
        type Target = SledLedger;
        fn deref(&self) -> &Self::Target {
            &self.ledger
        }
    }

    fn test_ledger() -> TestLedger {
        let dir = tempfile::tempdir().unwrap();
        let ledger = SledLedger::open(LedgerConfig::new(dir.path())).unwrap();
        TestLedger { ledger, _dir: dir }
    }

    #[test]
    fn test_put_and_get() {
        let ledger = test_ledger();
        ledger.put("1", b"one".to_vec()).unwrap();

        assert_eq!(ledger.get("1").unwrap(), Some(b"one".to_vec()));
        assert_eq!(ledger.get("2").unwrap(), None);
    }

    #[test]
    fn test_put_overwrites() {
        let ledger = test_ledger();
        ledger.put("1", b"one".to_vec()).unwrap();
        ledger.put("1", b"uno".to_vec()).unwrap();

        assert_eq!(ledger.get("1").unwrap(), Some(b"uno".to_vec()));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_range_scan_is_lexical_and_end_exclusive() {
        let ledger = test_ledger();
        for key in ["1", "2", "10", "999", "a"] {
            ledger.put(key, key.as_bytes().to_vec()).unwrap();
        }

        let keys: Vec<String> = ledger
            .range_scan("0", "999")
            .unwrap()
            .map(|kv| kv.unwrap().key)
            .collect();

        assert_eq!(keys, vec!["1", "10", "2"]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let ledger = test_ledger();
        ledger.put("5", b"five".to_vec()).unwrap();

        assert_eq!(ledger.range_scan("9", "1").unwrap().count(), 0);
        assert_eq!(ledger.range_scan("5", "5").unwrap().count(), 0);
    }

    #[test]
    fn test_size_on_disk_after_flush() {
        let ledger = test_ledger();
        for key in ["1", "2", "3"] {
            ledger.put(key, vec![b'x'; 256]).unwrap();
        }
        ledger.flush().unwrap();

        assert_eq!(ledger.len(), 3);
        assert!(ledger.size_on_disk().unwrap() > 0);
    }

    #[test]
    fn test_temporary_ledger() {
        let ledger = SledLedger::open(LedgerConfig::temporary()).unwrap();
        ledger.put("1", b"one".to_vec()).unwrap();

        assert_eq!(ledger.get("1").unwrap(), Some(b"one".to_vec()));
    }

    #[test]
    fn test_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let config = LedgerConfig::new(dir.path());

        {
            let ledger = SledLedger::open(config.clone()).unwrap();
            ledger.put("7", b"seven".to_vec()).unwrap();
            ledger.flush().unwrap();
        }

        {
            let ledger = SledLedger::open(config).unwrap();
            assert_eq!(ledger.get("7").unwrap(), Some(b"seven".to_vec()));
        }
    }
}
