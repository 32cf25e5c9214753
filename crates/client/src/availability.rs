//! Tiered availability operations.
//!
//! Availability must never block the booking flow. Every tier failure is
//! absorbed and logged, the next tier runs, and an exhausted chain yields
//! the permissive answer rather than an error. Tiers run strictly in
//! order, and a tier that yields data ends the chain even when that data
//! is sparse or empty.

use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;
use std::pin::Pin;

use chrono::NaiveDate;
use chrono_tz::Tz;
use fieldbook_core::errors::{FieldbookError, FieldbookResult};
use fieldbook_core::models::availability::{AvailabilitySlots, BookedSlotMap};
use fieldbook_core::models::field::{BranchId, Field, FieldId};
use fieldbook_core::slots;
use tracing::{debug, warn};

use crate::source::AvailabilitySource;

/// One fallback strategy's pending result.
type TierFuture<'a, T> = Pin<Box<dyn Future<Output = FieldbookResult<T>> + Send + 'a>>;

/// Runs named tiers in order and returns the first success. Failures are
/// absorbed and logged; `None` means the whole chain was exhausted.
async fn first_success<T>(operation: &str, tiers: Vec<(&str, TierFuture<'_, T>)>) -> Option<T> {
    for (tier, future) in tiers {
        match future.await {
            Ok(value) => {
                debug!("{} answered by the {} tier", operation, tier);
                return Some(value);
            }
            Err(err) => {
                warn!("{} tier {} failed, falling back: {}", operation, tier, err);
            }
        }
    }
    None
}

/// Booked slot labels per field for one branch and date.
///
/// Tier one derives booked hours from the all-fields availability feed:
/// for each reported field, `times` minus its available hours. Tier two
/// reconstructs them from the caller's own booking records. When both
/// fail the map is empty, and absent keys mean nothing is known and every
/// slot may be offered.
pub async fn booked_slots<S: AvailabilitySource + ?Sized>(
    source: &S,
    tz: Tz,
    branch: BranchId,
    date: NaiveDate,
    fields: &[Field],
    times: &[String],
) -> BookedSlotMap {
    let tiers: Vec<(&str, TierFuture<'_, BookedSlotMap>)> = vec![
        (
            "availability-feed",
            Box::pin(booked_from_feed(source, tz, branch, date, times)),
        ),
        (
            "own-bookings",
            Box::pin(booked_from_own_bookings(source, tz, branch, date, fields)),
        ),
    ];

    first_success("booked_slots", tiers).await.unwrap_or_default()
}

async fn booked_from_feed<S: AvailabilitySource + ?Sized>(
    source: &S,
    tz: Tz,
    branch: BranchId,
    date: NaiveDate,
    times: &[String],
) -> FieldbookResult<BookedSlotMap> {
    // Branch zero stands for "all branches" and is not sent upstream.
    let branch_filter = (branch > 0).then_some(branch);
    let feed = source.availability_feed(date, branch_filter, None).await?;

    let mut booked = BTreeMap::new();
    for field in feed {
        let available = slots::available_hours(&field.available_time_slots, times, &tz);
        booked.insert(field.field_id, slots::booked_set(times, &available));
    }
    Ok(booked)
}

async fn booked_from_own_bookings<S: AvailabilitySource + ?Sized>(
    source: &S,
    tz: Tz,
    branch: BranchId,
    date: NaiveDate,
    fields: &[Field],
) -> FieldbookResult<BookedSlotMap> {
    let mut booked: BookedSlotMap = fields
        .iter()
        .filter(|field| field.branch_id == branch)
        .map(|field| (field.id, BTreeSet::new()))
        .collect();

    let bookings = source.user_bookings().await?;
    for booking in bookings {
        // Booking dates are UTC instants; match on the UTC calendar day.
        if booking.booking_date.date_naive() != date {
            continue;
        }
        let hours = slots::booked_hours(booking.start_time, booking.end_time, &tz);
        booked.entry(booking.field_id).or_default().extend(hours);
    }
    Ok(booked)
}

/// Hourly availability for a single field on a date.
///
/// The field-scoped endpoint is asked for a ready-made grid first; the
/// all-fields feed is reconciled into one second. When both fail every
/// catalog slot is reported available so the booking flow can render.
pub async fn field_availability<S: AvailabilitySource + ?Sized>(
    source: &S,
    tz: Tz,
    field: FieldId,
    date: NaiveDate,
) -> AvailabilitySlots {
    let catalog = slots::slot_catalog();

    let tiers: Vec<(&str, TierFuture<'_, AvailabilitySlots>)> = vec![
        ("field-endpoint", Box::pin(source.field_slots(field, date))),
        (
            "availability-feed",
            Box::pin(slots_from_feed(source, tz, field, date, &catalog)),
        ),
    ];

    first_success("field_availability", tiers)
        .await
        .unwrap_or_else(|| AvailabilitySlots {
            slots: slots::all_available(&catalog),
        })
}

async fn slots_from_feed<S: AvailabilitySource + ?Sized>(
    source: &S,
    tz: Tz,
    field: FieldId,
    date: NaiveDate,
    catalog: &[String],
) -> FieldbookResult<AvailabilitySlots> {
    let feed = source.availability_feed(date, None, Some(field)).await?;
    let entry = feed
        .into_iter()
        .find(|candidate| candidate.field_id == field)
        .ok_or_else(|| {
            FieldbookError::NotFound(format!("field {} absent from availability feed", field))
        })?;

    let available = slots::available_hours(&entry.available_time_slots, catalog, &tz);
    Ok(AvailabilitySlots {
        slots: slots::classify_slots(catalog, &available),
    })
}
