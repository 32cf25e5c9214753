//! # Fieldbook Client
//!
//! The client crate talks to the sports-field booking backend. It wraps the
//! REST endpoints for fields, field types, and bookings, normalizes the
//! backend's several response envelope shapes at the decode boundary, and
//! reconciles raw availability intervals into the fixed hourly booking grid.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Endpoints**: Typed wrappers over the backend's REST routes
//! - **Envelope**: One untagged union per endpoint family, decoded once
//! - **Availability**: Tiered acquisition strategies for slot data
//! - **Cache**: Last-fetched booked-slot maps keyed by branch and date
//!
//! Availability lookups never fail: each tier failure is logged and the
//! next tier runs, and an exhausted chain degrades to the permissive
//! answer instead of an error. Mutations propagate their errors normally.

/// Tiered availability operations and the fallback combinator
pub mod availability;
/// Branch and date keyed cache of booked-slot maps
pub mod cache;
/// Environment-driven client configuration
pub mod config;
/// Typed wrappers over the backend's REST routes
pub mod endpoints;
/// Response envelope unions and boundary decoding
pub mod envelope;
/// Mock availability source for exercising the fallback tiers
pub mod mock;
/// The data-source seam the availability tiers consume
pub mod source;

mod http;

use chrono::NaiveDate;
use fieldbook_core::models::availability::{AvailabilitySlots, BookedSlotMap};
use fieldbook_core::models::field::{BranchId, Field, FieldId};

use crate::cache::AvailabilityCache;
use crate::config::ClientConfig;

/// Typed client for the booking backend.
///
/// Holds the HTTP connection pool, the resolved configuration, and the
/// availability cache. Cloneable handles are not provided; share the
/// client behind an `Arc` when multiple tasks need it.
///
/// # Example
///
/// ```no_run
/// use fieldbook_client::config::ClientConfig;
/// use fieldbook_client::FieldbookClient;
///
/// let client = FieldbookClient::new(ClientConfig::new("https://api.example.com/api"));
/// ```
pub struct FieldbookClient {
    http: reqwest::Client,
    config: ClientConfig,
    cache: AvailabilityCache,
}

impl FieldbookClient {
    /// Creates a client from a resolved configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            cache: AvailabilityCache::new(),
        }
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Booked slot labels per field for one branch and date.
    ///
    /// Runs the tiered acquisition chain: the availability feed first, the
    /// caller's own booking records second. The cache entry for the branch
    /// and date is invalidated before the fetch and replaced with the
    /// fresh answer afterwards, so repeated calls always reflect current
    /// server state.
    ///
    /// # Arguments
    ///
    /// * `branch` - Branch whose fields are being booked; `0` means all branches
    /// * `date` - Calendar date of the booking grid
    /// * `fields` - Known fields, used to seed the fallback tier
    /// * `times` - Slot labels of the booking grid, usually the catalog
    pub async fn booked_slots(
        &self,
        branch: BranchId,
        date: NaiveDate,
        fields: &[Field],
        times: &[String],
    ) -> BookedSlotMap {
        self.cache.invalidate(branch, date);
        let booked =
            availability::booked_slots(self, self.config.timezone, branch, date, fields, times)
                .await;
        self.cache.store(branch, date, booked.clone());
        booked
    }

    /// Hourly availability for a single field on a date.
    ///
    /// Asks the field-scoped endpoint for a ready-made grid first and
    /// reconstructs one from the availability feed when that fails. When
    /// every tier is exhausted the whole catalog is reported available so
    /// the booking flow can still render.
    pub async fn field_availability(&self, field: FieldId, date: NaiveDate) -> AvailabilitySlots {
        availability::field_availability(self, self.config.timezone, field, date).await
    }

    /// The most recently fetched booked-slot map for a branch and date,
    /// if one has been fetched this session.
    pub fn cached_booked_slots(&self, branch: BranchId, date: NaiveDate) -> Option<BookedSlotMap> {
        self.cache.get(branch, date)
    }
}
