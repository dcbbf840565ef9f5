//! Ledger capability consumed by the contract.
//!
//! The host platform owns the ledger: consensus, ordering, versioning and
//! replication all happen outside this crate. The contract only sees the
//! narrow [`Ledger`] interface below and receives it as an explicit
//! dependency on every call.
//!
//! Two adapters are provided:
//! - [`SledLedger`] runs the contract against a local sled database.
//! - [`MemoryLedger`] is an ordered in-memory ledger with fault injection for tests.

mod config;
mod memory;
mod sled_ledger;

pub use self::config::{LedgerConfig, DEFAULT_CACHE_CAPACITY, DEFAULT_FLUSH_EVERY_MS};
pub use self::memory::{MemoryLedger, MemoryScan};
pub use self::sled_ledger::{SledLedger, SledScan};

use thiserror::Error;

/// Ledger-level errors.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The backing store failed.
    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),

    /// The ledger refused or could not serve the request.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),

    /// A stored key is not valid UTF-8.
    #[error("invalid key: {0}")]
    InvalidKey(String),
}

/// A key-value pair yielded by a range scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Vec<u8>,
}

/// Versioned key-value ledger supplied by the host.
///
/// A scan is an open iteration handle. Dropping it releases the handle, so
/// every exit path of a caller (including `?` on a failed item) closes it.
pub trait Ledger {
    /// Iteration handle returned by [`range_scan`](Ledger::range_scan).
    type Scan<'a>: Iterator<Item = Result<KeyValue, LedgerError>>
    where
        Self: 'a;

    /// Retrieve the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Store `value` under `key`, replacing any existing value.
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError>;

    /// Iterate keys in `[start, end)` in lexical order.
    ///
    /// An empty or inverted range yields nothing.
    fn range_scan(&self, start: &str, end: &str) -> Result<Self::Scan<'_>, LedgerError>;
}
