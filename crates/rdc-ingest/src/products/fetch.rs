//! CSV parsing for the products feed

use anyhow::{Context, Result};
use tracing::warn;

use super::models::RawProduct;

/// Parse the products CSV bytes into raw records.
///
/// Rows that fail to deserialize are logged and skipped; the feed is dirty
/// by design and one bad row must not sink the dataset.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<RawProduct>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    // Fail loudly if the header row itself is unreadable
    reader
        .headers()
        .context("Products CSV has no readable header row")?;

    let mut products = Vec::new();

    for (line, record) in reader.deserialize::<RawProduct>().enumerate() {
        match record {
            Ok(product) => products.push(product),
            Err(e) => {
                warn!(line = line + 2, error = %e, "Skipping malformed CSV row");
            }
        }
    }

    tracing::info!(rows = products.len(), "Parsed products CSV");

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
,product_name,product_price,weight,category,EAN,date_added,uuid,removed,product_code\n\
0,FurReal Dazzlin' Dimples My Playful Dolphin,£39.99,1.6kg,toys-and-games,7425710935115,2005-12-02,83dc0a69-f96f-4c34-82b1-a1a7be5fb5a2,Still_avaliable,R7-3126933h\n\
1,Tiffany's World Day Out At The Park,£12.99,0.48kg,toys-and-games,1945816904649,2006-12-09,712254d7-aea7-4298-9558-40148cb48bd8,Still_avaliable,C2-7287916l\n";

    #[test]
    fn test_parse_csv() {
        let products = parse_csv(SAMPLE.as_bytes()).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(
            products[0].product_name.as_deref(),
            Some("FurReal Dazzlin' Dimples My Playful Dolphin")
        );
        assert_eq!(products[0].product_price.as_deref(), Some("£39.99"));
        assert_eq!(products[0].ean.as_deref(), Some("7425710935115"));
        assert_eq!(products[1].product_code.as_deref(), Some("C2-7287916l"));
    }

    #[test]
    fn test_parse_csv_empty_body() {
        let products = parse_csv(b",product_name,product_price\n").unwrap();
        assert!(products.is_empty());
    }
}
