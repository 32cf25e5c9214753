use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::field::FieldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldAvailability {
    pub field_id: FieldId,
    #[serde(default)]
    pub available_time_slots: Vec<AvailabilityWindow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStatus {
    pub time: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlots {
    pub slots: Vec<SlotStatus>,
}

/// Booked slot labels per field, for one branch and date. A field missing
/// from the map has no known bookings.
pub type BookedSlotMap = BTreeMap<FieldId, BTreeSet<String>>;
