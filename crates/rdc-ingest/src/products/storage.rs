//! Load path for dim_products

use anyhow::Result;
use sqlx::{PgPool, QueryBuilder};

use super::models::Product;
use crate::load::{begin_replace, commit_replace, varchar_width, INSERT_CHUNK};

/// Target table name
pub const TABLE: &str = "dim_products";

/// Build the CREATE TABLE body, sizing the code column from the data
fn table_columns(products: &[Product]) -> String {
    let code_width = varchar_width(products.iter().filter_map(|p| p.product_code.as_deref()));

    format!(
        "product_name TEXT, \
         product_price DOUBLE PRECISION NOT NULL, \
         weight_kg DOUBLE PRECISION, \
         category TEXT, \
         ean TEXT, \
         date_added TEXT, \
         uuid TEXT, \
         removed TEXT, \
         product_code VARCHAR({code_width})"
    )
}

/// Replace dim_products with the cleaned records
pub async fn replace(pool: &PgPool, products: &[Product]) -> Result<u64> {
    let mut tx = begin_replace(pool, TABLE, &table_columns(products)).await?;

    for chunk in products.chunks(INSERT_CHUNK) {
        let mut qb = QueryBuilder::new(
            "INSERT INTO dim_products (product_name, product_price, weight_kg, category, \
             ean, date_added, uuid, removed, product_code) ",
        );

        qb.push_values(chunk, |mut b, product| {
            b.push_bind(product.product_name.as_deref())
                .push_bind(product.product_price)
                .push_bind(product.weight_kg)
                .push_bind(product.category.as_deref())
                .push_bind(product.ean.as_deref())
                .push_bind(product.date_added.as_deref())
                .push_bind(product.uuid.as_deref())
                .push_bind(product.removed.as_deref())
                .push_bind(product.product_code.as_deref());
        });

        qb.build().execute(&mut *tx).await?;
    }

    commit_replace(tx, TABLE, products.len()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_columns() {
        let product = Product {
            product_name: None,
            product_price: 12.99,
            weight_kg: Some(0.48),
            category: None,
            ean: None,
            date_added: None,
            uuid: None,
            removed: None,
            product_code: Some("C2-7287916l".to_string()),
        };

        let ddl = table_columns(&[product]);
        assert!(ddl.contains("product_code VARCHAR(11)"));
        assert!(ddl.contains("product_price DOUBLE PRECISION NOT NULL"));
    }
}
