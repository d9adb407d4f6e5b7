use anyhow::{Context, Result};
use std::io;
use tracing_subscriber::EnvFilter;

use mailroom::{seeded_ledger, MailroomConfig, MailroomSession};

fn main() -> Result<()> {
    init_logging();

    let config = MailroomConfig::embedded()?;
    let ledger = seeded_ledger().context("Failed to load seed donors")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = MailroomSession::new(ledger, config, stdin.lock(), stdout.lock());
    session.run().context("Mailroom session failed")?;

    Ok(())
}

/// Logs go to stderr so they never mix with menu and letter output
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mailroom=warn")),
        )
        .with_writer(io::stderr)
        .init();
}
