//! legalyze - command line client for the contract analysis service.
//!
//! Logs in against the backend, keeps the session in the configured store
//! and exposes document analysis, issue reports and the admin dashboard as
//! subcommands.

mod cli;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let (action, _log_guard) = cli::start()?;

    action.execute().await
}
