use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::field::FieldId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub field_id: FieldId,
    pub booking_date: DateTime<Utc>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub status: Option<String>,
}
