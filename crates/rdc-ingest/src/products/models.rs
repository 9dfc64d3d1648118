//! Product record shapes before and after cleaning

use serde::Deserialize;

/// One row of the products CSV.
///
/// The file's unnamed leading index column is not mapped; unknown columns
/// are ignored by the deserializer.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub product_name: Option<String>,

    #[serde(default)]
    pub product_price: Option<String>,

    #[serde(default)]
    pub weight: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default, rename = "EAN")]
    pub ean: Option<String>,

    #[serde(default)]
    pub date_added: Option<String>,

    #[serde(default)]
    pub uuid: Option<String>,

    #[serde(default)]
    pub removed: Option<String>,

    #[serde(default)]
    pub product_code: Option<String>,
}

/// A cleaned product record, ready for `dim_products`
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_name: Option<String>,
    /// GBP; records without a parseable price are dropped
    pub product_price: f64,
    /// Kilograms, normalised from the mixed-unit weight strings
    pub weight_kg: Option<f64>,
    pub category: Option<String>,
    pub ean: Option<String>,
    pub date_added: Option<String>,
    pub uuid: Option<String>,
    pub removed: Option<String>,
    pub product_code: Option<String>,
}
