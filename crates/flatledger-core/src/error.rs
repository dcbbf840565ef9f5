//! Contract error types.

use thiserror::Error;

use crate::contract::error_codes;
use crate::ledger::LedgerError;
use crate::record::RecordField;

/// Contract errors.
///
/// Every variant renders a message naming the offending operation or key.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number of arguments for the named operation.
    #[error("incorrect number of arguments for {operation}: expecting {expected}, got {actual}")]
    InvalidArgumentCount {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// No value is stored under the key.
    #[error("could not locate flat: {0}")]
    RecordNotFound(String),

    /// The dispatcher received a name outside the operation set.
    #[error("invalid contract function name: {0}")]
    UnknownOperation(String),

    /// The ledger rejected a write.
    #[error("failed to {action}: {key}")]
    Persistence {
        action: String,
        key: String,
        #[source]
        source: LedgerError,
    },

    /// The ledger failed to start or continue a range scan.
    #[error("range scan failed: {0}")]
    Scan(#[source] LedgerError),

    /// The ledger failed a point read.
    #[error("failed to read {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: LedgerError,
    },

    /// Stored bytes could not be decoded.
    #[error("malformed record at {key}: {message}")]
    Decode { key: String, message: String },

    /// Encoding a value for the ledger or the caller failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A paginated listing asked for zero entries.
    #[error("invalid page size: {0}")]
    InvalidPageSize(usize),
}

impl Error {
    /// Build a persistence error for a whole-record write.
    pub(crate) fn record_write(action: &str, key: &str, source: LedgerError) -> Self {
        Error::Persistence {
            action: action.to_string(),
            key: key.to_string(),
            source,
        }
    }

    /// Build a persistence error for a single-field update.
    pub(crate) fn field_write(field: RecordField, key: &str, source: LedgerError) -> Self {
        Error::Persistence {
            action: format!("change flat {}", field),
            key: key.to_string(),
            source,
        }
    }

    /// Stable error code for this error.
    pub fn code(&self) -> u32 {
        match self {
            Error::InvalidArgumentCount { .. } => error_codes::INVALID_ARGUMENT_COUNT,
            Error::RecordNotFound(_) => error_codes::NOT_FOUND,
            Error::UnknownOperation(_) => error_codes::UNKNOWN_OPERATION,
            Error::Persistence { .. } => error_codes::PERSISTENCE,
            Error::Scan(_) => error_codes::SCAN,
            Error::Read { .. } => error_codes::READ,
            Error::Decode { .. } => error_codes::DECODE,
            Error::Serialization(_) => error_codes::INTERNAL,
            Error::InvalidPageSize(_) => error_codes::INVALID_REQUEST,
        }
    }
}
