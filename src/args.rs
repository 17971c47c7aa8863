//! These structs provide the CLI interface for the weeksum binary.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

/// weeksum: weekly spending summaries from a transaction ledger.
///
/// The ledger is a CSV file with at least the columns `date` (DD/MM/YYYY),
/// `categorisation` and `amount`. Every transaction is bucketed into the
/// Monday-start calendar week containing its date, and spending is summed
/// per category per week. The resulting tables can be printed to the
/// terminal or served as a small interactive web dashboard.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the weekly summary: one row per category, one column per week,
    /// and a TOTAL row summing each column.
    Summary(SummaryArgs),
    /// List the distinct week labels found in the ledger, most recent first.
    Weeks,
    /// Print raw transactions, optionally filtered by category.
    Transactions(TransactionsArgs),
    /// Serve the interactive web dashboard.
    Serve(ServeArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate
    /// for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The ledger CSV file to load. Defaults to finances.csv in the current
    /// directory.
    #[arg(long, env = "LEDGER_FILE", default_value = "finances.csv")]
    ledger: PathBuf,
}

impl Common {
    pub fn new(log_level: LevelFilter, ledger: PathBuf) -> Self {
        Self { log_level, ledger }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn ledger(&self) -> &Path {
        &self.ledger
    }
}

/// Args for the `weeksum summary` command.
#[derive(Debug, Parser, Clone)]
pub struct SummaryArgs {
    /// How many of the most recent weeks to include as columns.
    #[arg(long, default_value_t = 5, conflicts_with = "week")]
    weeks: usize,

    /// A specific week to include as a column, given as DD/MM/YYYY of any
    /// day inside that week. May be repeated; columns appear in the order
    /// given.
    #[arg(long)]
    week: Vec<String>,
}

impl SummaryArgs {
    pub fn new(weeks: usize, week: Vec<String>) -> Self {
        Self { weeks, week }
    }

    pub fn weeks(&self) -> usize {
        self.weeks
    }

    pub fn week(&self) -> &[String] {
        &self.week
    }
}

/// Args for the `weeksum transactions` command.
#[derive(Debug, Parser, Clone)]
pub struct TransactionsArgs {
    /// Only show transactions whose categorisation matches exactly
    /// (case-sensitive). Omit to show everything.
    #[arg(long)]
    category: Option<String>,
}

impl TransactionsArgs {
    pub fn new(category: Option<String>) -> Self {
        Self { category }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Args for the `weeksum serve` command.
#[derive(Debug, Parser, Clone)]
pub struct ServeArgs {
    /// The address to bind the dashboard server to.
    #[arg(long, default_value = "127.0.0.1:8050")]
    bind: String,
}

impl ServeArgs {
    pub fn new(bind: impl Into<String>) -> Self {
        Self { bind: bind.into() }
    }

    pub fn bind(&self) -> &str {
        &self.bind
    }
}
