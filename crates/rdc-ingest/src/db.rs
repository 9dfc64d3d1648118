//! Postgres connections and warehouse maintenance queries

use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;
use std::time::Duration;
use thiserror::Error;

use crate::config::DbCredentials;

/// Database operation errors with contextual information
#[derive(Error, Debug)]
pub enum DbError {
    /// SQL query or connection error
    #[error("Database query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Database configuration is invalid or missing
    #[error("Database configuration error: {0}")]
    Config(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// Default connection pool size.
///
/// The run is strictly sequential, so a couple of connections are plenty.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 2;

/// Default connection acquire timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Create a connection pool from YAML credentials
pub async fn create_pool(creds: &DbCredentials) -> DbResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .connect(&creds.connection_url())
        .await?;

    tracing::info!(
        host = %creds.host,
        database = %creds.database,
        "Database connection pool created"
    );

    Ok(pool)
}

/// Check that the database answers queries
pub async fn health_check(pool: &PgPool) -> DbResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(DbError::from)
}

/// List the base tables in the `public` schema
pub async fn list_tables(pool: &PgPool) -> DbResult<Vec<String>> {
    // information_schema columns are domain types; cast to text for decoding
    let rows = sqlx::query(
        "SELECT table_name::text AS table_name FROM information_schema.tables \
         WHERE table_schema = 'public' AND table_type = 'BASE TABLE' \
         ORDER BY table_name",
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| row.try_get::<String, _>("table_name").map_err(DbError::from))
        .collect()
}

/// Name of the currently connected database
pub async fn current_database(pool: &PgPool) -> DbResult<String> {
    let row = sqlx::query("SELECT current_database()::text")
        .fetch_one(pool)
        .await?;

    row.try_get::<String, _>(0).map_err(DbError::from)
}

/// One column of a table schema report
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ColumnInfo {
    pub column_name: String,
    pub data_type: String,
    pub character_maximum_length: Option<i32>,
}

impl ColumnInfo {
    /// Render the column type the way `\d` would, e.g. `character varying(12)`
    pub fn type_display(&self) -> String {
        match self.character_maximum_length {
            Some(len) => format!("{}({})", self.data_type, len),
            None => self.data_type.clone(),
        }
    }
}

/// Report the column schema of one table
pub async fn table_schema(pool: &PgPool, table: &str) -> DbResult<Vec<ColumnInfo>> {
    let columns = sqlx::query_as::<_, ColumnInfo>(
        "SELECT column_name::text AS column_name, \
                data_type::text AS data_type, \
                character_maximum_length::int4 AS character_maximum_length \
         FROM information_schema.columns \
         WHERE table_schema = 'public' AND table_name = $1 \
         ORDER BY ordinal_position",
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    Ok(columns)
}

/// Drop the named tables if they exist
pub async fn drop_tables(pool: &PgPool, tables: &[String]) -> DbResult<()> {
    for table in tables {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", quote_ident(table)))
            .execute(pool)
            .await?;

        tracing::info!(table = %table, "Table dropped");
    }

    Ok(())
}

/// Quote a SQL identifier, escaping embedded double quotes
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("orders_table"), "\"orders_table\"");
        assert_eq!(quote_ident("weird\"name"), "\"weird\"\"name\"");
    }

    #[test]
    fn test_column_type_display() {
        let col = ColumnInfo {
            column_name: "store_code".to_string(),
            data_type: "character varying".to_string(),
            character_maximum_length: Some(12),
        };
        assert_eq!(col.type_display(), "character varying(12)");

        let col = ColumnInfo {
            column_name: "longitude".to_string(),
            data_type: "double precision".to_string(),
            character_maximum_length: None,
        };
        assert_eq!(col.type_display(), "double precision");
    }

    #[tokio::test]
    #[ignore] // Requires a local Postgres (DATABASE_URL-style creds)
    async fn test_pool_round_trip() {
        let creds = DbCredentials {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            database: "postgres".to_string(),
        };

        let pool = create_pool(&creds).await.unwrap();
        health_check(&pool).await.unwrap();
        let db = current_database(&pool).await.unwrap();
        assert_eq!(db, "postgres");
    }
}
