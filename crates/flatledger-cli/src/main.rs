//! Flat Ledger Command-Line Harness
//!
//! Runs contract operations against a local sled-backed ledger.

mod executor;
mod formatter;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flatledger_core::config::{DEFAULT_MAX_PAGE_SIZE, DEFAULT_SCAN_END, DEFAULT_SCAN_START};
use flatledger_core::ledger::{DEFAULT_CACHE_CAPACITY, DEFAULT_FLUSH_EVERY_MS};
use flatledger_core::{ContractConfig, LedgerConfig, ScanBounds};
use formatter::OutputFormat;

/// Flat Ledger Command-Line Harness
#[derive(Parser, Debug)]
#[command(name = "flatledger")]
#[command(version, about = "Run flat ledger contract operations against a local ledger")]
pub struct Args {
    /// Path to the ledger directory
    #[arg(short, long, default_value = "./flatledger_data")]
    pub data_path: PathBuf,

    /// Use a throwaway ledger instead of the data path
    #[arg(long)]
    pub temporary: bool,

    /// Page cache capacity in bytes
    #[arg(long, default_value_t = DEFAULT_CACHE_CAPACITY)]
    pub cache_capacity: u64,

    /// Background flush interval in milliseconds (0 disables it)
    #[arg(long, default_value_t = DEFAULT_FLUSH_EVERY_MS)]
    pub flush_every_ms: u64,

    /// Disable ledger compression
    #[arg(long)]
    pub no_compression: bool,

    /// Inclusive start key of listing scans
    #[arg(long, default_value = DEFAULT_SCAN_START)]
    pub scan_start: String,

    /// Exclusive end key of listing scans
    #[arg(long, default_value = DEFAULT_SCAN_END)]
    pub scan_end: String,

    /// Largest page a paginated listing returns
    #[arg(long, default_value_t = DEFAULT_MAX_PAGE_SIZE)]
    pub max_page_size: usize,

    /// Output format
    #[arg(long, default_value = "pretty", value_enum)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Harness subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the instantiation hook
    Init,

    /// Invoke an operation by name, e.g. `invoke create 11 923F 1504054225 "1, 2" Som`
    Invoke {
        /// Operation name
        operation: String,

        /// Operation arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List one page of records
    List {
        /// Number of records on the page
        #[arg(long, default_value_t = 10)]
        page_size: usize,

        /// Key to resume from
        #[arg(long)]
        bookmark: Option<String>,
    },
}

impl Args {
    /// Ledger configuration from the storage options.
    pub fn ledger_config(&self) -> LedgerConfig {
        LedgerConfig::new(&self.data_path)
            .with_temporary(self.temporary)
            .with_cache_capacity(self.cache_capacity)
            .with_flush_every_ms((self.flush_every_ms > 0).then_some(self.flush_every_ms))
            .with_compression(!self.no_compression)
    }

    /// Contract configuration from the scan options.
    pub fn contract_config(&self) -> ContractConfig {
        ContractConfig::default()
            .with_scan_bounds(ScanBounds::new(&self.scan_start, &self.scan_end))
            .with_max_page_size(self.max_page_size)
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flatledger=info,flatledger_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match executor::run(&args) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
