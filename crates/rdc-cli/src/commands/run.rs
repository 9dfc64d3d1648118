//! `rdc run` - the one-shot ETL

use colored::Colorize;

use crate::error::{CliError, Result};
use rdc_ingest::config::EtlConfig;
use rdc_ingest::orchestrator::{run_all, Dataset, EtlContext};

/// Run the ETL across all datasets, or a single one
pub async fn run(
    config_file: &str,
    source_creds_file: &str,
    target_creds_file: &str,
    only: Option<&str>,
) -> Result<()> {
    let only = only
        .map(|name| name.parse::<Dataset>())
        .transpose()
        .map_err(|e| CliError::config(e.to_string()))?;

    let config = EtlConfig::load(config_file, source_creds_file, target_creds_file)
        .map_err(|e| CliError::config(format!("{:#}", e)))?;

    let ctx = EtlContext::connect(config).await?;

    let outcomes = run_all(&ctx, only).await;

    println!();
    println!("Run summary:");
    for outcome in &outcomes {
        let marker = if outcome.is_success() {
            "ok".green()
        } else {
            "failed".red()
        };
        println!("  [{}] {}", marker, outcome.summary());
    }

    let failed = outcomes.iter().filter(|o| !o.is_success()).count();
    if failed > 0 {
        return Err(CliError::RunFailed {
            failed,
            total: outcomes.len(),
        });
    }

    Ok(())
}
