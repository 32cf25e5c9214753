//! The hourly slot catalog and interval reconciliation rules.
//!
//! The booking grid is a fixed catalog of one-hour slots labeled `"08:00"`
//! through `"21:00"`. The backend reports availability as absolute UTC
//! intervals; the functions here convert those intervals into catalog
//! labels in a caller-chosen timezone and classify each slot as available
//! or booked.
//!
//! All conversions are end-exclusive on the hour: an interval ending at
//! 10:00 leaves the 10:00 slot untouched. Two interval shapes get special
//! treatment. A window ending exactly at midnight covers the 23:00 hour
//! that the exclusive loop would otherwise miss, and a midnight-to-midnight
//! window spanning exactly one day opens the entire catalog.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};

use crate::models::availability::{AvailabilityWindow, SlotStatus};

/// Number of bookable slots in a day.
pub const SLOT_COUNT: usize = 14;

/// Hour of the first bookable slot.
pub const OPENING_HOUR: u32 = 8;

/// The fixed slot catalog: one label per hour from `"08:00"` through
/// `"21:00"`, in grid order.
pub fn slot_catalog() -> Vec<String> {
    (OPENING_HOUR..OPENING_HOUR + SLOT_COUNT as u32)
        .map(hour_label)
        .collect()
}

/// Formats an hour of day as its zero-padded `"HH:00"` slot label.
pub fn hour_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}

/// Collects the hour labels covered by a set of availability windows,
/// rendered in `tz`.
///
/// Each window contributes its start-inclusive, end-exclusive hour range.
/// Labels outside the catalog may appear in the result; classification
/// later restricts to catalog slots. Windows never subtract hours, so the
/// union over any window order is the same set.
pub fn available_hours<Tz: TimeZone>(
    windows: &[AvailabilityWindow],
    catalog: &[String],
    tz: &Tz,
) -> BTreeSet<String> {
    let mut hours = BTreeSet::new();

    for window in windows {
        let start = window.start.with_timezone(tz);
        let end = window.end.with_timezone(tz);
        let start_hour = start.hour();
        let end_hour = end.hour();

        // A midnight-to-midnight window spanning exactly one calendar day
        // opens the whole catalog.
        if start_hour == 0
            && end_hour == 0
            && end.date_naive() == start.date_naive() + Duration::days(1)
        {
            hours.extend(catalog.iter().cloned());
            continue;
        }

        for hour in start_hour..end_hour {
            hours.insert(hour_label(hour));
        }

        // An end at exactly 00:00 runs through the last hour of the day,
        // which the end-exclusive loop above skipped.
        if end_hour == 0 && end.minute() == 0 {
            hours.insert(hour_label(23));
        }
    }

    hours
}

/// Classifies every catalog slot against a set of available hour labels.
/// Catalog order is preserved; anything absent from the set is booked.
pub fn classify_slots(catalog: &[String], available: &BTreeSet<String>) -> Vec<SlotStatus> {
    catalog
        .iter()
        .map(|time| SlotStatus {
            time: time.clone(),
            available: available.contains(time),
        })
        .collect()
}

/// The hour labels a booking occupies, rendered in `tz`. Start-inclusive
/// and end-exclusive, so a 21:00 to 23:00 booking covers `"21:00"` and
/// `"22:00"` only.
pub fn booked_hours<Tz: TimeZone>(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    tz: &Tz,
) -> Vec<String> {
    let start_hour = start.with_timezone(tz).hour();
    let end_hour = end.with_timezone(tz).hour();
    (start_hour..end_hour).map(hour_label).collect()
}

/// The booked complement of an available set, restricted to `times`.
pub fn booked_set(times: &[String], available: &BTreeSet<String>) -> BTreeSet<String> {
    times
        .iter()
        .filter(|time| !available.contains(*time))
        .cloned()
        .collect()
}

/// Every catalog slot marked available, the terminal answer when no
/// availability data can be obtained at all.
pub fn all_available(catalog: &[String]) -> Vec<SlotStatus> {
    catalog
        .iter()
        .map(|time| SlotStatus {
            time: time.clone(),
            available: true,
        })
        .collect()
}
