//! Column-level coercion helpers shared by the dataset cleaners
//!
//! Every helper returns `Option`: a value that cannot be coerced becomes
//! `None` and the caller decides whether to keep the record with a null
//! column or drop it. This mirrors how the cleaners treat dirty upstream
//! values throughout the pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Date formats observed in the upstream data, tried in order.
///
/// Besides ISO dates the legacy sources contain month-name permutations
/// such as "2006 September 03" and "July 1961 14".
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y %B %d", "%B %Y %d", "%d %B %Y"];

/// Leniently parse a date string, coercing unparseable values to `None`
pub fn parse_date_lenient(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Parse a plain floating point value, coercing failures to `None`
pub fn parse_f64_lenient(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a GBP price string such as "£1,234.56" into its numeric value
pub fn parse_price_gbp(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '£' && *c != ',')
        .collect();

    parse_f64_lenient(&cleaned)
}

/// Parse a product weight string into kilograms.
///
/// Accepted forms:
/// - `"1.2kg"` → 1.2
/// - `"500g"` → 0.5
/// - `"800ml"` → 0.8 (1:1 g/ml density assumption)
/// - `"12 x 100g"` → 1.2 (multi-pack)
/// - `"421"` → 0.421 (a bare number is assumed to be grams)
///
/// Anything that does not start with a number coerces to `None`.
pub fn parse_weight_kg(raw: &str) -> Option<f64> {
    let lowered = raw.trim().to_ascii_lowercase();
    let cleaned = lowered.trim_end_matches('.').trim();

    if let Some((count, each)) = cleaned.split_once('x') {
        let count: f64 = count.trim().parse().ok()?;
        return Some(count * parse_single_weight_kg(each.trim())?);
    }

    parse_single_weight_kg(cleaned)
}

/// Parse one `<number><unit>` weight term into kilograms
fn parse_single_weight_kg(term: &str) -> Option<f64> {
    let unit_start = term
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(term.len());
    let (number, unit) = term.split_at(unit_start);

    let value: f64 = number.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    match unit.trim() {
        "kg" => Some(value),
        // grams, millilitres, and unrecognized units all read as grams
        _ => Some(value / 1000.0),
    }
}

/// Parse a canonical UUID, coercing invalid values to `None`
pub fn parse_uuid_opt(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

/// Truncate a string to at most `max_chars` characters (char-boundary safe)
pub fn truncate(raw: &str, max_chars: usize) -> String {
    raw.chars().take(max_chars).collect()
}

/// Deserialize a JSON field that may arrive as a string, number, or null
/// into `Option<String>`.
///
/// The store API and the date-details document are stringly typed but not
/// consistently so; numeric cells show up as JSON numbers.
pub fn de_opt_stringly<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(value.and_then(|v| match v {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }))
}
