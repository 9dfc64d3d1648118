//! Store record shapes before and after cleaning

use serde::Deserialize;

use crate::coerce::de_opt_stringly;

/// One store as returned by the store details API.
///
/// The API is stringly typed but not consistently so; the numeric-looking
/// fields are accepted as either JSON strings or numbers.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStore {
    #[serde(default)]
    pub index: Option<i64>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "de_opt_stringly")]
    pub longitude: Option<String>,

    /// Legacy junk column, present in old payloads and dropped in cleaning
    #[serde(default, deserialize_with = "de_opt_stringly")]
    pub lat: Option<String>,

    #[serde(default)]
    pub locality: Option<String>,

    #[serde(default)]
    pub store_code: Option<String>,

    #[serde(default, deserialize_with = "de_opt_stringly")]
    pub staff_numbers: Option<String>,

    #[serde(default)]
    pub opening_date: Option<String>,

    #[serde(default)]
    pub store_type: Option<String>,

    #[serde(default, deserialize_with = "de_opt_stringly")]
    pub latitude: Option<String>,

    #[serde(default)]
    pub country_code: Option<String>,

    #[serde(default)]
    pub continent: Option<String>,
}

/// A cleaned store record, ready for `dim_store_details`
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub address: Option<String>,
    pub longitude: f64,
    pub latitude: f64,
    pub locality: Option<String>,
    pub store_code: Option<String>,
    pub staff_numbers: Option<String>,
    pub opening_date: Option<String>,
    pub store_type: Option<String>,
    pub country_code: Option<String>,
    pub continent: Option<String>,
}
