//! Contract configuration.

/// Default inclusive start key of the listing scan.
pub const DEFAULT_SCAN_START: &str = "0";

/// Default exclusive end key of the listing scan.
pub const DEFAULT_SCAN_END: &str = "999";

/// Default upper bound on a single listing page.
pub const DEFAULT_MAX_PAGE_SIZE: usize = 100;

/// Lexical key bounds of a range scan: `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanBounds {
    /// Inclusive start key.
    pub start: String,

    /// Exclusive end key.
    pub end: String,
}

impl ScanBounds {
    /// Create bounds covering `[start, end)`.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Check whether a key falls inside the bounds.
    pub fn contains(&self, key: &str) -> bool {
        key >= self.start.as_str() && key < self.end.as_str()
    }
}

impl Default for ScanBounds {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_START, DEFAULT_SCAN_END)
    }
}

/// Configuration for the contract.
#[derive(Debug, Clone)]
pub struct ContractConfig {
    /// Key bounds scanned by `listAll` and paginated listing.
    pub scan: ScanBounds,

    /// Largest page a paginated listing returns.
    pub max_page_size: usize,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            scan: ScanBounds::default(),
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl ContractConfig {
    /// Set the listing scan bounds.
    pub fn with_scan_bounds(mut self, scan: ScanBounds) -> Self {
        self.scan = scan;
        self
    }

    /// Set the maximum page size.
    pub fn with_max_page_size(mut self, size: usize) -> Self {
        self.max_page_size = size.max(1);
        self
    }
}
