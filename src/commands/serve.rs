//! The `serve` command: runs the web dashboard.

use crate::args::ServeArgs;
use crate::{web, Ledger, Result};
use anyhow::Context;
use std::sync::Arc;
use tracing::info;

/// Serves the dashboard until the process is terminated. The ledger is
/// shared read-only across request handlers; no locking is needed because
/// nothing writes after load.
pub async fn serve(ledger: Ledger, args: &ServeArgs) -> Result<()> {
    let app = web::router(Arc::new(ledger));
    let listener = tokio::net::TcpListener::bind(args.bind())
        .await
        .with_context(|| format!("Unable to bind {}", args.bind()))?;
    info!("Dashboard listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .await
        .context("The dashboard server exited unexpectedly")
}
