//! Cleaning rules for the cards dataset

use super::models::{Card, RawCard};
use crate::coerce::parse_date_lenient;

/// Clean one card record.
///
/// The expiry stays as text; the payment confirmation date coerces to a
/// proper date or NULL. Nothing drops a card row.
pub fn clean(raw: RawCard) -> Card {
    Card {
        card_number: raw.card_number,
        expiry_date: raw.expiry_date,
        card_provider: raw.card_provider,
        date_payment_confirmed: parse_date_lenient(&raw.date_payment_confirmed),
    }
}

/// Clean a batch of card records
pub fn clean_all(raw: Vec<RawCard>) -> Vec<Card> {
    raw.into_iter().map(clean).collect()
}
