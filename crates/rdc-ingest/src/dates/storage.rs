//! Load path for dim_date_times

use anyhow::Result;
use sqlx::{PgPool, QueryBuilder};

use super::models::DateDetail;
use crate::load::{begin_replace, commit_replace, varchar_width, INSERT_CHUNK};

/// Target table name
pub const TABLE: &str = "dim_date_times";

/// Build the CREATE TABLE body, sizing the timestamp column from the data
fn table_columns(dates: &[DateDetail]) -> String {
    let ts_width = varchar_width(dates.iter().filter_map(|d| d.timestamp.as_deref()));

    format!(
        "timestamp VARCHAR({ts_width}), \
         month TEXT, \
         year TEXT, \
         day TEXT, \
         time_period TEXT, \
         date_uuid UUID"
    )
}

/// Replace dim_date_times with the cleaned records
pub async fn replace(pool: &PgPool, dates: &[DateDetail]) -> Result<u64> {
    let mut tx = begin_replace(pool, TABLE, &table_columns(dates)).await?;

    for chunk in dates.chunks(INSERT_CHUNK) {
        let mut qb = QueryBuilder::new(
            "INSERT INTO dim_date_times (timestamp, month, year, day, time_period, date_uuid) ",
        );

        qb.push_values(chunk, |mut b, date| {
            b.push_bind(date.timestamp.as_deref())
                .push_bind(date.month.as_deref())
                .push_bind(date.year.as_deref())
                .push_bind(date.day.as_deref())
                .push_bind(date.time_period.as_deref())
                .push_bind(date.date_uuid);
        });

        qb.build().execute(&mut *tx).await?;
    }

    commit_replace(tx, TABLE, dates.len()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_columns() {
        let date = DateDetail {
            timestamp: Some("22:00:00".to_string()),
            month: None,
            year: None,
            day: None,
            time_period: None,
            date_uuid: None,
        };

        let ddl = table_columns(&[date]);
        assert!(ddl.contains("timestamp VARCHAR(8)"));
        assert!(ddl.contains("date_uuid UUID"));
    }
}
