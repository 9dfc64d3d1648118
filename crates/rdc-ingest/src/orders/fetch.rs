//! Extraction of the legacy orders table

use anyhow::{Context, Result};
use sqlx::PgPool;

use super::models::RawOrder;
use crate::db::quote_ident;

/// Fetch every row of the legacy orders table.
///
/// The junk columns (`first_name`, `last_name`, `"1"`, the serial index)
/// are not selected, which is how they get dropped from the target schema.
pub async fn fetch(pool: &PgPool, table: &str) -> Result<Vec<RawOrder>> {
    let sql = format!(
        "SELECT date_uuid::text AS date_uuid, \
                user_uuid::text AS user_uuid, \
                card_number::text AS card_number, \
                store_code::text AS store_code, \
                product_code::text AS product_code, \
                product_quantity::bigint AS product_quantity \
         FROM {}",
        quote_ident(table)
    );

    let rows = sqlx::query_as::<_, RawOrder>(&sql)
        .fetch_all(pool)
        .await
        .with_context(|| format!("Failed to read table {}", table))?;

    tracing::info!(table = %table, rows = rows.len(), "Extracted orders");

    Ok(rows)
}
