//! Local ledger configuration.

use std::path::PathBuf;

/// Default page cache capacity (64 MB).
pub const DEFAULT_CACHE_CAPACITY: u64 = 64 * 1024 * 1024;

/// Default background flush interval in milliseconds.
pub const DEFAULT_FLUSH_EVERY_MS: u64 = 500;

/// Configuration for the sled-backed ledger.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Path to the ledger directory.
    pub path: PathBuf,

    /// Page cache capacity in bytes.
    pub cache_capacity: u64,

    /// Background flush interval in milliseconds. None disables background
    /// flushing, leaving durability to explicit [`flush`](super::SledLedger::flush) calls.
    pub flush_every_ms: Option<u64>,

    /// Enable zstd compression.
    pub compression: bool,

    /// Temporary ledger (deleted on drop).
    pub temporary: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./flatledger_data"),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            flush_every_ms: Some(DEFAULT_FLUSH_EVERY_MS),
            compression: true,
            temporary: false,
        }
    }
}

impl LedgerConfig {
    /// Create a new configuration with the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Create a temporary configuration. The ledger is deleted on drop.
    pub fn temporary() -> Self {
        Self::default().with_temporary(true)
    }

    /// Make the ledger temporary. The path is ignored when set.
    pub fn with_temporary(mut self, temporary: bool) -> Self {
        self.temporary = temporary;
        self
    }

    /// Set the page cache capacity.
    pub fn with_cache_capacity(mut self, bytes: u64) -> Self {
        self.cache_capacity = bytes;
        self
    }

    /// Set the background flush interval. None disables it.
    pub fn with_flush_every_ms(mut self, ms: Option<u64>) -> Self {
        self.flush_every_ms = ms;
        self
    }

    /// Enable or disable compression.
    pub fn with_compression(mut self, compression: bool) -> Self {
        self.compression = compression;
        self
    }

    /// Convert to sled configuration.
    pub(crate) fn to_sled_config(&self) -> sled::Config {
        let mut config = sled::Config::new()
            .cache_capacity(self.cache_capacity)
            .use_compression(self.compression)
            .flush_every_ms(self.flush_every_ms);

        if self.temporary {
            config = config.temporary(true);
        } else {
            config = config.path(&self.path);
        }

        config
    }
}
