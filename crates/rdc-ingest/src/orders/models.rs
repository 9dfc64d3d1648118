//! Order record shapes before and after cleaning

use uuid::Uuid;

/// One row of the legacy orders table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RawOrder {
    pub date_uuid: Option<String>,
    pub user_uuid: Option<String>,
    pub card_number: Option<String>,
    pub store_code: Option<String>,
    pub product_code: Option<String>,
    pub product_quantity: Option<i64>,
}

/// A cleaned order record, ready for the target orders_table
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub date_uuid: Option<Uuid>,
    pub user_uuid: Option<Uuid>,
    pub card_number: Option<String>,
    pub store_code: Option<String>,
    pub product_code: Option<String>,
    /// SMALLINT in the target schema
    pub product_quantity: Option<i16>,
}
