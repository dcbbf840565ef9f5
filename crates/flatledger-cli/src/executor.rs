//! Run one harness command against a local ledger.

use flatledger_core::{Contract, LedgerError, Response, SledLedger};
use thiserror::Error;

use crate::formatter::format_payload;
use crate::{Args, Command};

/// Errors surfaced to the terminal.
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// The local ledger could not be opened or flushed.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// The contract rejected the call.
    #[error("{message} (code {code})")]
    Contract { code: u32, message: String },
}

impl ExecuteError {
    fn from_response(response: &Response) -> Self {
        ExecuteError::Contract {
            code: response.code().unwrap_or_default(),
            message: response.message().unwrap_or_default().to_string(),
        }
    }
}

/// Execute the parsed command and return the text to print.
pub fn run(args: &Args) -> Result<String, ExecuteError> {
    let ledger = SledLedger::open(args.ledger_config())?;
    tracing::debug!(
        data_path = %args.data_path.display(),
        recovered = ledger.was_recovered(),
        "ledger opened"
    );

    let contract = Contract::with_config(&ledger, args.contract_config());

    let response = match &args.command {
        Command::Init => contract.init(),
        Command::Invoke { operation, args } => contract.invoke(operation, args),
        Command::List {
            page_size,
            bookmark,
        } => match contract
            .list_page(*page_size, bookmark.as_deref())
            .and_then(|page| page.to_bytes())
        {
            Ok(payload) => Response::success(payload),
            Err(e) => Response::from_error(&e),
        },
    };

    ledger.flush()?;
    tracing::debug!(
        keys = ledger.len(),
        size_on_disk = ledger.size_on_disk()?,
        "ledger flushed"
    );

    if !response.is_ok() {
        return Err(ExecuteError::from_response(&response));
    }
    Ok(format_payload(&response.payload, args.format))
}
