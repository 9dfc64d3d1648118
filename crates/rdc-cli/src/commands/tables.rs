//! `rdc tables` - list tables in the source or target database

use crate::error::{CliError, Result};
use rdc_ingest::config::DbCredentials;
use rdc_ingest::db;

/// List the public tables of the chosen database
pub async fn run(source_creds_file: &str, target_creds_file: &str, target: bool) -> Result<()> {
    let creds_file = if target {
        target_creds_file
    } else {
        source_creds_file
    };

    let creds = DbCredentials::from_file(creds_file)
        .map_err(|e| CliError::config(format!("{:#}", e)))?;

    let pool = db::create_pool(&creds).await?;
    let database = db::current_database(&pool).await?;
    let tables = db::list_tables(&pool).await?;

    println!("Tables in database '{}':", database);
    if tables.is_empty() {
        println!("  (none)");
    }
    for table in tables {
        println!("  {}", table);
    }

    Ok(())
}
