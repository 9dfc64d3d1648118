//! Load path for the target orders_table

use anyhow::Result;
use sqlx::{PgPool, QueryBuilder};

use super::models::Order;
use crate::load::{begin_replace, commit_replace, varchar_width, INSERT_CHUNK};

/// Target table name
pub const TABLE: &str = "orders_table";

/// Build the CREATE TABLE body, sizing the code columns from the data
fn table_columns(orders: &[Order]) -> String {
    let card_width = varchar_width(orders.iter().filter_map(|o| o.card_number.as_deref()));
    let store_width = varchar_width(orders.iter().filter_map(|o| o.store_code.as_deref()));
    let product_width = varchar_width(orders.iter().filter_map(|o| o.product_code.as_deref()));

    format!(
        "date_uuid UUID, \
         user_uuid UUID, \
         card_number VARCHAR({card_width}), \
         store_code VARCHAR({store_width}), \
         product_code VARCHAR({product_width}), \
         product_quantity SMALLINT"
    )
}

/// Replace orders_table with the cleaned records
pub async fn replace(pool: &PgPool, orders: &[Order]) -> Result<u64> {
    let mut tx = begin_replace(pool, TABLE, &table_columns(orders)).await?;

    for chunk in orders.chunks(INSERT_CHUNK) {
        let mut qb = QueryBuilder::new(
            "INSERT INTO orders_table (date_uuid, user_uuid, card_number, store_code, \
             product_code, product_quantity) ",
        );

        qb.push_values(chunk, |mut b, order| {
            b.push_bind(order.date_uuid)
                .push_bind(order.user_uuid)
                .push_bind(order.card_number.as_deref())
                .push_bind(order.store_code.as_deref())
                .push_bind(order.product_code.as_deref())
                .push_bind(order.product_quantity);
        });

        qb.build().execute(&mut *tx).await?;
    }

    commit_replace(tx, TABLE, orders.len()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_columns_sizes_codes_from_data() {
        let order = Order {
            date_uuid: None,
            user_uuid: None,
            card_number: Some("30060773296197".to_string()),
            store_code: Some("BL-8387506C".to_string()),
            product_code: Some("R7-3126933h".to_string()),
            product_quantity: Some(3),
        };

        let ddl = table_columns(&[order]);
        assert!(ddl.contains("card_number VARCHAR(14)"));
        assert!(ddl.contains("store_code VARCHAR(11)"));
        assert!(ddl.contains("product_code VARCHAR(11)"));
        assert!(ddl.contains("product_quantity SMALLINT"));
    }
}
