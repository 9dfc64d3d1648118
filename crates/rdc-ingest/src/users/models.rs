//! User record shapes before and after cleaning

use chrono::NaiveDate;
use uuid::Uuid;

/// One row of `legacy_users`, every column read as text
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RawUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub company: Option<String>,
    pub email_address: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub phone_number: Option<String>,
    pub join_date: Option<String>,
    pub user_uuid: Option<String>,
}

/// A cleaned user record, ready for `dim_users`
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Truncated to 255 characters
    pub first_name: Option<String>,
    /// Truncated to 255 characters
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub company: Option<String>,
    pub email_address: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    /// Truncated to 3 characters
    pub country_code: Option<String>,
    pub phone_number: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub user_uuid: Option<Uuid>,
}
