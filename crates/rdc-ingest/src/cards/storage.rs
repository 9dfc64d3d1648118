//! Load path for dim_card_details

use anyhow::Result;
use sqlx::{PgPool, QueryBuilder};

use super::models::Card;
use crate::load::{begin_replace, commit_replace, varchar_width, INSERT_CHUNK};

/// Target table name
pub const TABLE: &str = "dim_card_details";

/// Build the CREATE TABLE body, sizing the text columns from the data
fn table_columns(cards: &[Card]) -> String {
    let number_width = varchar_width(cards.iter().map(|c| c.card_number.as_str()));
    let expiry_width = varchar_width(cards.iter().map(|c| c.expiry_date.as_str()));

    format!(
        "card_number VARCHAR({number_width}), \
         expiry_date VARCHAR({expiry_width}), \
         card_provider TEXT, \
         date_payment_confirmed DATE"
    )
}

/// Replace dim_card_details with the cleaned records
pub async fn replace(pool: &PgPool, cards: &[Card]) -> Result<u64> {
    let mut tx = begin_replace(pool, TABLE, &table_columns(cards)).await?;

    for chunk in cards.chunks(INSERT_CHUNK) {
        let mut qb = QueryBuilder::new(
            "INSERT INTO dim_card_details (card_number, expiry_date, card_provider, \
             date_payment_confirmed) ",
        );

        qb.push_values(chunk, |mut b, card| {
            b.push_bind(card.card_number.as_str())
                .push_bind(card.expiry_date.as_str())
                .push_bind(card.card_provider.as_str())
                .push_bind(card.date_payment_confirmed);
        });

        qb.build().execute(&mut *tx).await?;
    }

    commit_replace(tx, TABLE, cards.len()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_columns() {
        let card = Card {
            card_number: "30060773296197".to_string(),
            expiry_date: "09/26".to_string(),
            card_provider: "Diners Club / Carte Blanche".to_string(),
            date_payment_confirmed: None,
        };

        let ddl = table_columns(&[card]);
        assert!(ddl.contains("card_number VARCHAR(14)"));
        assert!(ddl.contains("expiry_date VARCHAR(5)"));
        assert!(ddl.contains("date_payment_confirmed DATE"));
    }
}
