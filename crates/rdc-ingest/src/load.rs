//! Shared helpers for the bulk table replacement load path
//!
//! Every dataset loads the same way: drop the target table, create it with
//! the final column types, and insert the cleaned records in batches inside
//! a single transaction. VARCHAR widths are computed from the data so the
//! created columns are as tight as the legacy ALTER pass used to make them.

use anyhow::{Context, Result};
use sqlx::{PgPool, Postgres, Transaction};

use crate::db::quote_ident;

/// Rows per INSERT statement
pub const INSERT_CHUNK: usize = 500;

/// Width for a VARCHAR column sized from the observed values (minimum 1)
pub fn varchar_width<'a, I>(values: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(1)
}

/// Begin a replace-table transaction: drop the table and recreate it
///
/// `columns` is the body of the CREATE TABLE statement.
pub async fn begin_replace<'a>(
    pool: &PgPool,
    table: &str,
    columns: &str,
) -> Result<Transaction<'a, Postgres>> {
    let mut tx = pool.begin().await.context("Failed to begin transaction")?;

    sqlx::query(&format!("DROP TABLE IF EXISTS {}", quote_ident(table)))
        .execute(&mut *tx)
        .await
        .with_context(|| format!("Failed to drop table {}", table))?;

    sqlx::query(&format!("CREATE TABLE {} ({})", quote_ident(table), columns))
        .execute(&mut *tx)
        .await
        .with_context(|| format!("Failed to create table {}", table))?;

    Ok(tx)
}

/// Commit a replace-table transaction and log the result
pub async fn commit_replace(
    tx: Transaction<'_, Postgres>,
    table: &str,
    rows: usize,
) -> Result<u64> {
    tx.commit().await.context("Failed to commit transaction")?;

    tracing::info!(table = %table, rows = rows, "Table replaced");

    Ok(rows as u64)
}
