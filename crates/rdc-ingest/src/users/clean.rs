//! Cleaning rules for the users dataset

use super::models::{RawUser, User};
use crate::coerce::{parse_date_lenient, parse_uuid_opt, truncate};

/// Maximum name length in `dim_users`
const NAME_MAX: usize = 255;

/// Maximum country code length in `dim_users`
const COUNTRY_CODE_MAX: usize = 3;

/// Clean one user record.
///
/// Nothing drops a user row; unparseable dates and UUIDs coerce to NULL.
pub fn clean(raw: RawUser) -> User {
    User {
        first_name: raw.first_name.map(|v| truncate(&v, NAME_MAX)),
        last_name: raw.last_name.map(|v| truncate(&v, NAME_MAX)),
        date_of_birth: raw.date_of_birth.as_deref().and_then(parse_date_lenient),
        company: raw.company,
        email_address: raw.email_address,
        address: raw.address,
        country: raw.country,
        country_code: raw.country_code.map(|v| truncate(&v, COUNTRY_CODE_MAX)),
        phone_number: raw.phone_number,
        join_date: raw.join_date.as_deref().and_then(parse_date_lenient),
        user_uuid: raw.user_uuid.as_deref().and_then(parse_uuid_opt),
    }
}

/// Clean a batch of user records
pub fn clean_all(raw: Vec<RawUser>) -> Vec<User> {
    raw.into_iter().map(clean).collect()
}
