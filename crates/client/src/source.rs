//! The data-source seam the availability tiers consume.
//!
//! The tiered operations need three remote queries. They are factored
//! behind a trait so the tier order and degradation policy can be
//! exercised against a mock source without a backend.

use async_trait::async_trait;
use chrono::NaiveDate;
use fieldbook_core::errors::FieldbookResult;
use fieldbook_core::models::availability::{AvailabilitySlots, FieldAvailability};
use fieldbook_core::models::booking::Booking;
use fieldbook_core::models::field::{BranchId, FieldId};

use crate::FieldbookClient;

#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    /// Per-field available intervals for a date, optionally filtered by
    /// branch or field.
    async fn availability_feed(
        &self,
        date: NaiveDate,
        branch: Option<BranchId>,
        field: Option<FieldId>,
    ) -> FieldbookResult<Vec<FieldAvailability>>;

    /// A ready-made slot grid for one field and date.
    async fn field_slots(
        &self,
        field: FieldId,
        date: NaiveDate,
    ) -> FieldbookResult<AvailabilitySlots>;

    /// The caller's own booking records.
    async fn user_bookings(&self) -> FieldbookResult<Vec<Booking>>;
}

#[async_trait]
impl AvailabilitySource for FieldbookClient {
    async fn availability_feed(
        &self,
        date: NaiveDate,
        branch: Option<BranchId>,
        field: Option<FieldId>,
    ) -> FieldbookResult<Vec<FieldAvailability>> {
        FieldbookClient::availability_feed(self, date, branch, field).await
    }

    async fn field_slots(
        &self,
        field: FieldId,
        date: NaiveDate,
    ) -> FieldbookResult<AvailabilitySlots> {
        FieldbookClient::field_slots(self, field, date).await
    }

    async fn user_bookings(&self) -> FieldbookResult<Vec<Booking>> {
        FieldbookClient::user_bookings(self).await
    }
}
