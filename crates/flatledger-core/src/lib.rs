//! Flat Ledger Core - Flat record schema and contract operations.
//!
//! This crate implements the flat property-record contract. The contract is
//! stateless: every call borrows a [`Ledger`] capability supplied by the host,
//! reads or writes through it, and returns a [`Response`].

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod config;
pub mod contract;
pub mod error;
pub mod ledger;
pub mod record;

pub use config::{ContractConfig, ScanBounds};
pub use contract::{
    error_codes, invoke, seed_flats, Contract, ListEntry, ListPage, Operation, Response, Status,
};
pub use error::Error;
pub use ledger::{KeyValue, Ledger, LedgerConfig, LedgerError, MemoryLedger, SledLedger};
pub use record::{Flat, RecordField};
