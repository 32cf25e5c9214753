//! Response envelope unions and boundary decoding.
//!
//! The backend answers the same logical query in several shapes depending
//! on route age: wrapped in a `data` property, keyed by a legacy property,
//! or bare. Each endpoint family gets one untagged union that enumerates
//! its known shapes, decoded exactly once at the response boundary. A body
//! matching none of the shapes is logged and rejected; the caller decides
//! whether that triggers a fallback tier or a hard error.
//!
//! Variant order matters for untagged enums. The shapes that require the
//! most keys come first so a body carrying extra keys is not swallowed by
//! a looser variant.

use fieldbook_core::errors::{FieldbookError, FieldbookResult};
use fieldbook_core::models::availability::{AvailabilitySlots, FieldAvailability};
use fieldbook_core::models::booking::Booking;
use fieldbook_core::models::field::{Field, FieldType};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

/// Decodes a response body into one of an endpoint family's known
/// envelope shapes. `what` names the payload in logs and errors.
pub fn decode<T: DeserializeOwned>(body: &str, what: &str) -> FieldbookResult<T> {
    serde_json::from_str(body).map_err(|err| {
        warn!("Unrecognized {} response shape: {}", what, err);
        FieldbookError::UnexpectedShape(format!("{}: {}", what, err))
    })
}

/// A single field: the current `{ status, data }` shape, a plain `data`
/// wrapper, the legacy `{ field }` shape, or a bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FieldEnvelope {
    Standard { status: bool, data: Field },
    Wrapped { data: Field },
    Legacy { field: Field },
    Bare(Field),
}

impl FieldEnvelope {
    pub fn into_field(self) -> Field {
        match self {
            FieldEnvelope::Standard { data, .. } | FieldEnvelope::Wrapped { data } => data,
            FieldEnvelope::Legacy { field } | FieldEnvelope::Bare(field) => field,
        }
    }
}

/// A list of fields, wrapped in `data` or bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FieldListEnvelope {
    Wrapped { data: Vec<Field> },
    Bare(Vec<Field>),
}

impl FieldListEnvelope {
    pub fn into_fields(self) -> Vec<Field> {
        match self {
            FieldListEnvelope::Wrapped { data } => data,
            FieldListEnvelope::Bare(fields) => fields,
        }
    }
}

/// Field types arrive wrapped in `data`, keyed as `fieldTypes`, or bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FieldTypesEnvelope {
    Wrapped {
        data: Vec<FieldType>,
    },
    Keyed {
        #[serde(rename = "fieldTypes")]
        field_types: Vec<FieldType>,
    },
    Bare(Vec<FieldType>),
}

impl FieldTypesEnvelope {
    pub fn into_types(self) -> Vec<FieldType> {
        match self {
            FieldTypesEnvelope::Wrapped { data } => data,
            FieldTypesEnvelope::Keyed { field_types } => field_types,
            FieldTypesEnvelope::Bare(types) => types,
        }
    }
}

/// A single field type, wrapped in `data` or bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FieldTypeEnvelope {
    Wrapped { data: FieldType },
    Bare(FieldType),
}

impl FieldTypeEnvelope {
    pub fn into_type(self) -> FieldType {
        match self {
            FieldTypeEnvelope::Wrapped { data } => data,
            FieldTypeEnvelope::Bare(field_type) => field_type,
        }
    }
}

/// The all-fields availability feed: a `{ success, data }` pair, a plain
/// `data` wrapper, or a bare list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AvailabilityFeedEnvelope {
    Flagged {
        success: bool,
        #[serde(default)]
        data: Vec<FieldAvailability>,
    },
    Wrapped {
        data: Vec<FieldAvailability>,
    },
    Bare(Vec<FieldAvailability>),
}

impl AvailabilityFeedEnvelope {
    /// The per-field interval lists, or `None` when the feed itself
    /// reported failure.
    pub fn into_fields(self) -> Option<Vec<FieldAvailability>> {
        match self {
            AvailabilityFeedEnvelope::Flagged { success: false, .. } => None,
            AvailabilityFeedEnvelope::Flagged { data, .. } => Some(data),
            AvailabilityFeedEnvelope::Wrapped { data } => Some(data),
            AvailabilityFeedEnvelope::Bare(fields) => Some(fields),
        }
    }
}

/// A ready-made slot grid for one field, wrapped in `data` or bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FieldSlotsEnvelope {
    Wrapped { data: AvailabilitySlots },
    Bare(AvailabilitySlots),
}

impl FieldSlotsEnvelope {
    pub fn into_slots(self) -> AvailabilitySlots {
        match self {
            FieldSlotsEnvelope::Wrapped { data } => data,
            FieldSlotsEnvelope::Bare(slots) => slots,
        }
    }
}

/// The caller's booking records, wrapped in `data` or bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BookingListEnvelope {
    Wrapped { data: Vec<Booking> },
    Bare(Vec<Booking>),
}

impl BookingListEnvelope {
    pub fn into_bookings(self) -> Vec<Booking> {
        match self {
            BookingListEnvelope::Wrapped { data } => data,
            BookingListEnvelope::Bare(bookings) => bookings,
        }
    }
}

/// Acknowledgement body returned by delete endpoints.
#[derive(Debug, Deserialize)]
pub struct MessageEnvelope {
    pub message: String,
}
