//! Invocation results returned to the host.

use crate::error::Error;

/// Result of one invocation: a status plus the success payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Response status.
    pub status: Status,
    /// Payload bytes. Empty on error and for operations that return nothing.
    pub payload: Vec<u8>,
}

/// Response status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Invocation succeeded.
    Ok,
    /// Invocation failed.
    Error {
        /// Error code for programmatic handling.
        code: u32,
        /// Human-readable error message.
        message: String,
    },
}

impl Status {
    /// Check if this is a success status.
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl Response {
    /// Create a successful response carrying `payload`.
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: Status::Ok,
            payload,
        }
    }

    /// Create a successful response with no payload.
    pub fn empty() -> Self {
        Self::success(Vec::new())
    }

    /// Create an error response.
    pub fn error(code: u32, message: impl Into<String>) -> Self {
        Self {
            status: Status::Error {
                code,
                message: message.into(),
            },
            payload: Vec::new(),
        }
    }

    /// Render a contract error.
    pub fn from_error(error: &Error) -> Self {
        Self::error(error.code(), error.to_string())
    }

    /// Check if the invocation succeeded.
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    /// Error message, if the invocation failed.
    pub fn message(&self) -> Option<&str> {
        match &self.status {
            Status::Ok => None,
            Status::Error { message, .. } => Some(message),
        }
    }

    /// Error code, if the invocation failed.
    pub fn code(&self) -> Option<u32> {
        match &self.status {
            Status::Ok => None,
            Status::Error { code, .. } => Some(*code),
        }
    }
}

/// Error codes carried by failed responses.
pub mod error_codes {
    /// Unknown/internal error.
    pub const INTERNAL: u32 = 1;
    /// Invalid request parameters.
    pub const INVALID_REQUEST: u32 = 2;
    /// No record stored under the key.
    pub const NOT_FOUND: u32 = 3;
    /// Wrong number of arguments for the operation.
    pub const INVALID_ARGUMENT_COUNT: u32 = 4;
    /// Operation name not recognized.
    pub const UNKNOWN_OPERATION: u32 = 5;
    /// Ledger write failed.
    pub const PERSISTENCE: u32 = 6;
    /// Ledger range scan failed.
    pub const SCAN: u32 = 7;
    /// Ledger read failed.
    pub const READ: u32 = 8;
    /// Stored data could not be decoded.
    pub const DECODE: u32 = 9;
}
