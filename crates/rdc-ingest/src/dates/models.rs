//! Date-detail record shapes before and after cleaning

use serde::Deserialize;
use uuid::Uuid;

use crate::coerce::de_opt_stringly;

/// One date-detail row as found in the JSON document
#[derive(Debug, Clone, Deserialize)]
pub struct RawDateDetail {
    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default, deserialize_with = "de_opt_stringly")]
    pub month: Option<String>,

    #[serde(default, deserialize_with = "de_opt_stringly")]
    pub year: Option<String>,

    #[serde(default, deserialize_with = "de_opt_stringly")]
    pub day: Option<String>,

    #[serde(default)]
    pub time_period: Option<String>,

    #[serde(default)]
    pub date_uuid: Option<String>,
}

/// A cleaned date-detail record, ready for `dim_date_times`
#[derive(Debug, Clone, PartialEq)]
pub struct DateDetail {
    pub timestamp: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
    pub day: Option<String>,
    pub time_period: Option<String>,
    pub date_uuid: Option<Uuid>,
}
