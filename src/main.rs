use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use weeksum::args::{Args, Command};
use weeksum::{commands, Ledger, Result};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");

    // The ledger is loaded exactly once at startup and read-only thereafter.
    // A malformed row fails the whole load; a partial dataset is never served.
    let ledger = Ledger::load(args.common().ledger())?;

    // Route to appropriate command handler
    let _: () = match args.command() {
        Command::Summary(summary_args) => commands::summary(&ledger, summary_args)?.print(),

        Command::Weeks => commands::weeks(&ledger)?.print(),

        Command::Transactions(transactions_args) => {
            commands::transactions(&ledger, transactions_args)?.print()
        }

        Command::Serve(serve_args) => commands::serve(ledger, serve_args).await?,
    };
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_CRATE_NAME"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
