//! Cleaning rules for the stores dataset

use tracing::debug;

use super::models::{RawStore, Store};
use crate::coerce::parse_f64_lenient;

/// Clean one store record.
///
/// A record without parseable coordinates is dropped; everything else is
/// carried through. The legacy `lat` and `index` columns are discarded.
pub fn clean(raw: RawStore) -> Option<Store> {
    let longitude = raw.longitude.as_deref().and_then(parse_f64_lenient);
    let latitude = raw.latitude.as_deref().and_then(parse_f64_lenient);

    let (Some(longitude), Some(latitude)) = (longitude, latitude) else {
        debug!(
            store_code = raw.store_code.as_deref().unwrap_or("<none>"),
            "Dropping store without parseable coordinates"
        );
        return None;
    };

    Some(Store {
        address: raw.address,
        longitude,
        latitude,
        locality: raw.locality,
        store_code: raw.store_code,
        staff_numbers: raw.staff_numbers,
        opening_date: raw.opening_date,
        store_type: raw.store_type,
        country_code: raw.country_code,
        continent: raw.continent,
    })
}

/// Clean a batch of store records, dropping the unparseable ones
pub fn clean_all(raw: Vec<RawStore>) -> Vec<Store> {
    raw.into_iter().filter_map(clean).collect()
}
