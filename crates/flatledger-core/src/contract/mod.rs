//! Flat contract: operation dispatch over an injected ledger.
//!
//! A [`Contract`] borrows the host's [`Ledger`] for the duration of a call
//! and keeps no state of its own. Every invocation re-reads the ledger, so
//! the same contract can run in any number of execution contexts at once.
//!
//! # Example
//!
//! ```
//! use flatledger_core::{Contract, MemoryLedger};
//!
//! let ledger = MemoryLedger::new();
//! let contract = Contract::new(&ledger);
//!
//! let args: Vec<String> = ["11", "923F", "1504054225", "67.0006, -70.5476", "Marjan"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! assert!(contract.invoke("create", &args).is_ok());
//!
//! let response = contract.invoke("query", &["11".to_string()]);
//! assert!(response.is_ok());
//! ```

mod handlers;
mod listing;
mod operation;
mod response;
mod seed;

pub use listing::{ListEntry, ListPage};
pub use operation::Operation;
pub use response::{error_codes, Response, Status};
pub use seed::seed_flats;

use tracing::{instrument, warn};

use crate::config::ContractConfig;
use crate::error::Error;
use crate::ledger::Ledger;

/// The flat contract bound to one ledger capability.
pub struct Contract<'l, L> {
    ledger: &'l L,
    config: ContractConfig,
}

impl<'l, L: Ledger> Contract<'l, L> {
    /// Create a contract over `ledger` with the default configuration.
    pub fn new(ledger: &'l L) -> Self {
        Self::with_config(ledger, ContractConfig::default())
    }

    /// Create a contract over `ledger` with the given configuration.
    pub fn with_config(ledger: &'l L, config: ContractConfig) -> Self {
        Self { ledger, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Instantiation hook. Performs no ledger writes.
    pub fn init(&self) -> Response {
        Response::empty()
    }

    /// Invoke an operation by name.
    ///
    /// This is the host entry point: any failure is rendered into the
    /// returned [`Response`] rather than propagated.
    #[instrument(skip(self, args), fields(arg_count = args.len()))]
    pub fn invoke(&self, name: &str, args: &[String]) -> Response {
        let result = name
            .parse::<Operation>()
            .and_then(|operation| self.execute(operation, args));

        match result {
            Ok(payload) => Response::success(payload),
            Err(e) => {
                warn!(operation = name, error = %e, "operation failed");
                Response::from_error(&e)
            }
        }
    }

    /// Execute a typed operation, checking its arity before touching the ledger.
    pub fn execute(&self, operation: Operation, args: &[String]) -> Result<Vec<u8>, Error> {
        operation.check_arity(args)?;
        let handler = operation.handler::<L>();
        handler(self, args)
    }

    pub(crate) fn ledger(&self) -> &'l L {
        self.ledger
    }
}

/// Invoke `name` against `ledger` with the default configuration.
pub fn invoke<L: Ledger>(ledger: &L, name: &str, args: &[String]) -> Response {
    Contract::new(ledger).invoke(name, args)
}
