//! `rdc drop` - drop target tables

use crate::error::{CliError, Result};
use rdc_ingest::config::DbCredentials;
use rdc_ingest::db;

/// Drop the named tables from the target warehouse
pub async fn run(target_creds_file: &str, tables: &[String], yes: bool) -> Result<()> {
    if !yes {
        return Err(CliError::NotConfirmed);
    }

    let creds = DbCredentials::from_file(target_creds_file)
        .map_err(|e| CliError::config(format!("{:#}", e)))?;

    let pool = db::create_pool(&creds).await?;
    db::drop_tables(&pool, tables).await?;

    println!("Dropped {} table(s).", tables.len());

    Ok(())
}
