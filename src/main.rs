use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use account_ledger::{run_scenario, statement, LedgerConfig, VERSION};

fn main() -> Result<()> {
    // Diagnostics go to stderr; the statement is the only stdout output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,account_ledger=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(version = VERSION, "Starting account ledger demo");

    let config = LedgerConfig::from_env()?;
    tracing::info!(
        interest_rate = config.default_interest_rate,
        overdraft_limit = config.default_overdraft_limit,
        "Configuration loaded"
    );

    let accounts = run_scenario(&config).context("Demo scenario rejected an operation")?;

    for line in statement(&accounts) {
        println!("{}", line);
    }

    Ok(())
}
