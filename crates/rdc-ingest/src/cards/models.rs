//! Card record shapes before and after cleaning

use chrono::NaiveDate;

/// One card row as parsed out of the PDF text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCard {
    pub card_number: String,
    pub expiry_date: String,
    pub card_provider: String,
    pub date_payment_confirmed: String,
}

/// A cleaned card record, ready for `dim_card_details`
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub card_number: String,
    /// Kept as text (MM/YY)
    pub expiry_date: String,
    pub card_provider: String,
    pub date_payment_confirmed: Option<NaiveDate>,
}
