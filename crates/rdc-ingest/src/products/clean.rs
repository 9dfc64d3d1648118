//! Cleaning rules for the products dataset

use tracing::debug;

use super::models::{Product, RawProduct};
use crate::coerce::{parse_price_gbp, parse_weight_kg};

/// Clean one product record.
///
/// A record whose price cannot be cleaned is dropped; an unparseable
/// weight only nulls the weight column.
pub fn clean(raw: RawProduct) -> Option<Product> {
    let Some(product_price) = raw.product_price.as_deref().and_then(parse_price_gbp) else {
        debug!(
            product_code = raw.product_code.as_deref().unwrap_or("<none>"),
            "Dropping product without a cleanable price"
        );
        return None;
    };

    Some(Product {
        product_name: raw.product_name,
        product_price,
        weight_kg: raw.weight.as_deref().and_then(parse_weight_kg),
        category: raw.category,
        ean: raw.ean,
        date_added: raw.date_added,
        uuid: raw.uuid,
        removed: raw.removed,
        product_code: raw.product_code,
    })
}

/// Clean a batch of product records, dropping the priceless ones
pub fn clean_all(raw: Vec<RawProduct>) -> Vec<Product> {
    raw.into_iter().filter_map(clean).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_product() -> RawProduct {
        RawProduct {
            product_name: Some("Tiffany's World Day Out At The Park".to_string()),
            product_price: Some("£12.99".to_string()),
            weight: Some("0.48kg".to_string()),
            category: Some("toys-and-games".to_string()),
            ean: Some("1945816904649".to_string()),
            date_added: Some("2006-12-09".to_string()),
            uuid: Some("712254d7-aea7-4298-9558-40148cb48bd8".to_string()),
            removed: Some("Still_avaliable".to_string()),
            product_code: Some("C2-7287916l".to_string()),
        }
    }

    #[test]
    fn test_clean_parses_price_and_weight() {
        let product = clean(raw_product()).unwrap();
        assert_eq!(product.product_price, 12.99);
        assert_eq!(product.weight_kg, Some(0.48));
    }

    #[test]
    fn test_clean_converts_gram_weights() {
        let mut raw = raw_product();
        raw.weight = Some("590g".to_string());

        let product = clean(raw).unwrap();
        assert_eq!(product.weight_kg, Some(0.59));
    }

    #[test]
    fn test_clean_drops_unpriceable_rows() {
        let mut raw = raw_product();
        raw.product_price = Some("VLPCU81M30".to_string());
        assert!(clean(raw).is_none());

        let mut raw = raw_product();
        raw.product_price = None;
        assert!(clean(raw).is_none());
    }

    #[test]
    fn test_clean_keeps_rows_with_bad_weight() {
        let mut raw = raw_product();
        raw.weight = Some("C3NCA2CL35".to_string());

        let product = clean(raw).unwrap();
        assert_eq!(product.weight_kg, None);
    }
}
