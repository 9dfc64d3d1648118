//! Load path for dim_store_details

use anyhow::Result;
use sqlx::{PgPool, QueryBuilder};

use super::models::Store;
use crate::load::{begin_replace, commit_replace, varchar_width, INSERT_CHUNK};

/// Target table name
pub const TABLE: &str = "dim_store_details";

/// Build the CREATE TABLE body, sizing the code columns from the data
fn table_columns(stores: &[Store]) -> String {
    let store_width = varchar_width(stores.iter().filter_map(|s| s.store_code.as_deref()));
    let code_width = varchar_width(stores.iter().filter_map(|s| s.country_code.as_deref()));

    format!(
        "address TEXT, \
         longitude DOUBLE PRECISION NOT NULL, \
         latitude DOUBLE PRECISION NOT NULL, \
         locality TEXT, \
         store_code VARCHAR({store_width}), \
         staff_numbers TEXT, \
         opening_date TEXT, \
         store_type TEXT, \
         country_code VARCHAR({code_width}), \
         continent TEXT"
    )
}

/// Replace dim_store_details with the cleaned records
pub async fn replace(pool: &PgPool, stores: &[Store]) -> Result<u64> {
    let mut tx = begin_replace(pool, TABLE, &table_columns(stores)).await?;

    for chunk in stores.chunks(INSERT_CHUNK) {
        let mut qb = QueryBuilder::new(
            "INSERT INTO dim_store_details (address, longitude, latitude, locality, \
             store_code, staff_numbers, opening_date, store_type, country_code, continent) ",
        );

        qb.push_values(chunk, |mut b, store| {
            b.push_bind(store.address.as_deref())
                .push_bind(store.longitude)
                .push_bind(store.latitude)
                .push_bind(store.locality.as_deref())
                .push_bind(store.store_code.as_deref())
                .push_bind(store.staff_numbers.as_deref())
                .push_bind(store.opening_date.as_deref())
                .push_bind(store.store_type.as_deref())
                .push_bind(store.country_code.as_deref())
                .push_bind(store.continent.as_deref());
        });

        qb.build().execute(&mut *tx).await?;
    }

    commit_replace(tx, TABLE, stores.len()).await
}
