//! Cleaning rules for the orders dataset

use super::models::{Order, RawOrder};
use crate::coerce::parse_uuid_opt;

/// Clean one order record.
///
/// UUID columns are validated; codes stay as text; the quantity is cast to
/// the SMALLINT range with out-of-range values coerced to NULL.
pub fn clean(raw: RawOrder) -> Order {
    Order {
        date_uuid: raw.date_uuid.as_deref().and_then(parse_uuid_opt),
        user_uuid: raw.user_uuid.as_deref().and_then(parse_uuid_opt),
        card_number: raw.card_number,
        store_code: raw.store_code,
        product_code: raw.product_code,
        product_quantity: raw.product_quantity.and_then(|q| i16::try_from(q).ok()),
    }
}

/// Clean a batch of order records
pub fn clean_all(raw: Vec<RawOrder>) -> Vec<Order> {
    raw.into_iter().map(clean).collect()
}
