//! Extraction of the legacy users table

use anyhow::{Context, Result};
use sqlx::PgPool;

use super::models::RawUser;
use crate::db::quote_ident;

/// Fetch every row of the legacy users table, columns cast to text
pub async fn fetch(pool: &PgPool, table: &str) -> Result<Vec<RawUser>> {
    let sql = format!(
        "SELECT first_name::text AS first_name, \
                last_name::text AS last_name, \
                date_of_birth::text AS date_of_birth, \
                company::text AS company, \
                email_address::text AS email_address, \
                address::text AS address, \
                country::text AS country, \
                country_code::text AS country_code, \
                phone_number::text AS phone_number, \
                join_date::text AS join_date, \
                user_uuid::text AS user_uuid \
         FROM {}",
        quote_ident(table)
    );

    let rows = sqlx::query_as::<_, RawUser>(&sql)
        .fetch_all(pool)
        .await
        .with_context(|| format!("Failed to read table {}", table))?;

    tracing::info!(table = %table, rows = rows.len(), "Extracted legacy users");

    Ok(rows)
}
