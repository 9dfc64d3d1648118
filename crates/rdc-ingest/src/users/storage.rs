//! Load path for dim_users

use anyhow::Result;
use sqlx::{PgPool, QueryBuilder};

use super::models::User;
use crate::load::{begin_replace, commit_replace, varchar_width, INSERT_CHUNK};

/// Target table name
pub const TABLE: &str = "dim_users";

/// Build the CREATE TABLE body, sizing country_code from the data
fn table_columns(users: &[User]) -> String {
    let code_width = varchar_width(
        users
            .iter()
            .filter_map(|u| u.country_code.as_deref()),
    );

    format!(
        "first_name VARCHAR(255), \
         last_name VARCHAR(255), \
         date_of_birth DATE, \
         company TEXT, \
         email_address TEXT, \
         address TEXT, \
         country TEXT, \
         country_code VARCHAR({code_width}), \
         phone_number TEXT, \
         join_date DATE, \
         user_uuid UUID"
    )
}

/// Replace dim_users with the cleaned records
pub async fn replace(pool: &PgPool, users: &[User]) -> Result<u64> {
    let mut tx = begin_replace(pool, TABLE, &table_columns(users)).await?;

    for chunk in users.chunks(INSERT_CHUNK) {
        let mut qb = QueryBuilder::new(
            "INSERT INTO dim_users (first_name, last_name, date_of_birth, company, \
             email_address, address, country, country_code, phone_number, join_date, user_uuid) ",
        );

        qb.push_values(chunk, |mut b, user| {
            b.push_bind(user.first_name.as_deref())
                .push_bind(user.last_name.as_deref())
                .push_bind(user.date_of_birth)
                .push_bind(user.company.as_deref())
                .push_bind(user.email_address.as_deref())
                .push_bind(user.address.as_deref())
                .push_bind(user.country.as_deref())
                .push_bind(user.country_code.as_deref())
                .push_bind(user.phone_number.as_deref())
                .push_bind(user.join_date)
                .push_bind(user.user_uuid);
        });

        qb.build().execute(&mut *tx).await?;
    }

    commit_replace(tx, TABLE, users.len()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_columns_sizes_country_code() {
        let user = User {
            first_name: None,
            last_name: None,
            date_of_birth: None,
            company: None,
            email_address: None,
            address: None,
            country: None,
            country_code: Some("GB".to_string()),
            phone_number: None,
            join_date: None,
            user_uuid: None,
        };

        let ddl = table_columns(&[user]);
        assert!(ddl.contains("country_code VARCHAR(2)"));
        assert!(ddl.contains("user_uuid UUID"));
    }

    #[test]
    fn test_table_columns_empty_batch() {
        let ddl = table_columns(&[]);
        assert!(ddl.contains("country_code VARCHAR(1)"));
    }
}
