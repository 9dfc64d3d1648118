//! Cleaning rules for the dates dataset

use super::models::{DateDetail, RawDateDetail};
use crate::coerce::parse_uuid_opt;

/// Clean one date-detail record.
///
/// The columns pass through as-is; only `date_uuid` is validated.
pub fn clean(raw: RawDateDetail) -> DateDetail {
    DateDetail {
        timestamp: raw.timestamp,
        month: raw.month,
        year: raw.year,
        day: raw.day,
        time_period: raw.time_period,
        date_uuid: raw.date_uuid.as_deref().and_then(parse_uuid_opt),
    }
}

/// Clean a batch of date-detail records
pub fn clean_all(raw: Vec<RawDateDetail>) -> Vec<DateDetail> {
    raw.into_iter().map(clean).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_validates_uuid() {
        let detail = clean(RawDateDetail {
            timestamp: Some("22:00:00".to_string()),
            month: Some("9".to_string()),
            year: Some("2012".to_string()),
            day: Some("19".to_string()),
            time_period: Some("Evening".to_string()),
            date_uuid: Some("3b7ff8cc-4a4a-401b-b3bb-f5e14f5ff580".to_string()),
        });

        assert!(detail.date_uuid.is_some());
        assert_eq!(detail.time_period.as_deref(), Some("Evening"));
    }

    #[test]
    fn test_clean_coerces_bad_uuid() {
        let detail = clean(RawDateDetail {
            timestamp: None,
            month: None,
            year: None,
            day: None,
            time_period: None,
            date_uuid: Some("DXBU6GX1VC".to_string()),
        });

        assert_eq!(detail.date_uuid, None);
    }
}
