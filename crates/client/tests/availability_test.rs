use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use mockall::predicate;
use pretty_assertions::assert_eq;

use fieldbook_client::availability::{booked_slots, field_availability};
use fieldbook_client::mock::MockSource;
use fieldbook_core::errors::FieldbookError;
use fieldbook_core::models::availability::{
    AvailabilitySlots, AvailabilityWindow, FieldAvailability, SlotStatus,
};
use fieldbook_core::models::booking::Booking;
use fieldbook_core::models::field::{BranchId, Field, FieldId};
use fieldbook_core::slots::{slot_catalog, SLOT_COUNT};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()
}

fn utc(year: i32, month: u32, date: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, date, hour, 0, 0).unwrap()
}

fn test_field(id: FieldId, branch: BranchId) -> Field {
    Field {
        id,
        name: format!("Field {}", id),
        branch_id: branch,
        field_type_id: None,
        price_per_hour: None,
        image_url: None,
        created_at: None,
    }
}

fn booking(field_id: FieldId, date: NaiveDate, start_hour: u32, end_hour: u32) -> Booking {
    let start_time = utc(date.year(), date.month(), date.day(), start_hour);
    let end_time = utc(date.year(), date.month(), date.day(), end_hour);
    Booking {
        id: 0,
        field_id,
        booking_date: utc(date.year(), date.month(), date.day(), 0),
        start_time,
        end_time,
        status: None,
    }
}

fn labels(hours: &[&str]) -> BTreeSet<String> {
    hours.iter().map(|hour| hour.to_string()).collect()
}

#[tokio::test]
async fn test_booked_slots_uses_feed_tier_first() {
    let mut source = MockSource::new();
    let times = slot_catalog();

    // Feed answers, so the own-bookings tier must never run
    source
        .expect_availability_feed()
        .with(
            predicate::eq(day()),
            predicate::eq(Some(5)),
            predicate::eq(None),
        )
        .times(1)
        .returning(|_, _, _| {
            Ok(vec![FieldAvailability {
                field_id: 1,
                available_time_slots: vec![AvailabilityWindow {
                    start: utc(2025, 6, 14, 8),
                    end: utc(2025, 6, 14, 10),
                }],
            }])
        });
    source.expect_user_bookings().times(0);

    let booked = booked_slots(&source, Tz::UTC, 5, day(), &[], &times).await;

    let hours = booked.get(&1).expect("field 1 should be present");
    assert_eq!(hours.len(), SLOT_COUNT - 2);
    assert!(!hours.contains("08:00"));
    assert!(!hours.contains("09:00"));
    assert!(hours.contains("10:00"));
    assert!(hours.contains("21:00"));
}

#[tokio::test]
async fn test_booked_slots_branch_zero_is_not_forwarded() {
    let mut source = MockSource::new();

    source
        .expect_availability_feed()
        .with(
            predicate::eq(day()),
            predicate::eq(None),
            predicate::eq(None),
        )
        .times(1)
        .returning(|_, _, _| Ok(Vec::new()));

    let booked = booked_slots(&source, Tz::UTC, 0, day(), &[], &slot_catalog()).await;

    assert!(booked.is_empty());
}

#[tokio::test]
async fn test_empty_feed_still_ends_the_chain() {
    let mut source = MockSource::new();

    source
        .expect_availability_feed()
        .times(1)
        .returning(|_, _, _| Ok(Vec::new()));
    source.expect_user_bookings().times(0);

    let booked = booked_slots(&source, Tz::UTC, 5, day(), &[test_field(1, 5)], &slot_catalog()).await;

    assert!(booked.is_empty());
}

#[tokio::test]
async fn test_booked_slots_falls_back_to_own_bookings() {
    let mut source = MockSource::new();
    let other_day = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    source
        .expect_availability_feed()
        .times(1)
        .returning(|_, _, _| Err(FieldbookError::Transport(eyre::eyre!("feed offline"))));

    // One booking on the requested day, one on another day
    source.expect_user_bookings().times(1).returning(move || {
        Ok(vec![
            booking(21, day(), 14, 16),
            booking(21, other_day, 8, 10),
        ])
    });

    let fields = [test_field(21, 5), test_field(22, 5), test_field(30, 6)];
    let booked = booked_slots(&source, Tz::UTC, 5, day(), &fields, &slot_catalog()).await;

    assert_eq!(booked.get(&21), Some(&labels(&["14:00", "15:00"])));
    assert_eq!(booked.get(&22), Some(&BTreeSet::new()));
    assert_eq!(booked.get(&30), None);
}

#[tokio::test]
async fn test_own_bookings_for_unlisted_fields_still_count() {
    let mut source = MockSource::new();

    source
        .expect_availability_feed()
        .times(1)
        .returning(|_, _, _| Err(FieldbookError::Transport(eyre::eyre!("feed offline"))));
    source
        .expect_user_bookings()
        .times(1)
        .returning(|| Ok(vec![booking(99, day(), 8, 9)]));

    let booked = booked_slots(&source, Tz::UTC, 2, day(), &[test_field(1, 2)], &slot_catalog()).await;

    assert_eq!(booked.get(&99), Some(&labels(&["08:00"])));
    assert_eq!(booked.get(&1), Some(&BTreeSet::new()));
}

#[tokio::test]
async fn test_booked_slots_total_failure_yields_empty_map() {
    let mut source = MockSource::new();

    source
        .expect_availability_feed()
        .times(1)
        .returning(|_, _, _| Err(FieldbookError::Transport(eyre::eyre!("feed offline"))));
    source
        .expect_user_bookings()
        .times(1)
        .returning(|| Err(FieldbookError::Transport(eyre::eyre!("bookings offline"))));

    let booked = booked_slots(&source, Tz::UTC, 3, day(), &[test_field(1, 3)], &slot_catalog()).await;

    assert!(booked.is_empty());
}

#[tokio::test]
async fn test_field_availability_uses_field_endpoint_first() {
    let mut source = MockSource::new();
    let grid = AvailabilitySlots {
        slots: vec![SlotStatus {
            time: "08:00".to_string(),
            available: false,
        }],
    };
    let expected = grid.clone();

    source
        .expect_field_slots()
        .with(predicate::eq(4), predicate::eq(day()))
        .times(1)
        .returning(move |_, _| Ok(grid.clone()));
    source.expect_availability_feed().times(0);

    let result = field_availability(&source, Tz::UTC, 4, day()).await;

    // The endpoint's grid passes through untouched
    assert_eq!(result, expected);
}

#[tokio::test]
async fn test_field_availability_reconciles_the_feed_on_fallback() {
    let mut source = MockSource::new();

    source
        .expect_field_slots()
        .times(1)
        .returning(|_, _| Err(FieldbookError::Transport(eyre::eyre!("route missing"))));
    source
        .expect_availability_feed()
        .with(
            predicate::eq(day()),
            predicate::eq(None),
            predicate::eq(Some(4)),
        )
        .times(1)
        .returning(|_, _, _| {
            Ok(vec![FieldAvailability {
                field_id: 4,
                available_time_slots: vec![AvailabilityWindow {
                    start: utc(2025, 6, 14, 1),
                    end: utc(2025, 6, 14, 3),
                }],
            }])
        });

    // 01:00Z to 03:00Z is 08:00 to 10:00 in Jakarta
    let result = field_availability(&source, Tz::Asia__Jakarta, 4, day()).await;

    assert_eq!(result.slots.len(), SLOT_COUNT);
    assert!(result.slots[0].available);
    assert!(result.slots[1].available);
    assert!(result.slots.iter().skip(2).all(|slot| !slot.available));
}

#[tokio::test]
async fn test_field_availability_empty_windows_mark_all_booked() {
    let mut source = MockSource::new();

    source
        .expect_field_slots()
        .times(1)
        .returning(|_, _| Err(FieldbookError::Transport(eyre::eyre!("route missing"))));
    source
        .expect_availability_feed()
        .times(1)
        .returning(|_, _, _| {
            Ok(vec![FieldAvailability {
                field_id: 4,
                available_time_slots: Vec::new(),
            }])
        });

    let result = field_availability(&source, Tz::UTC, 4, day()).await;

    assert_eq!(result.slots.len(), SLOT_COUNT);
    assert!(result.slots.iter().all(|slot| !slot.available));
}

#[tokio::test]
async fn test_field_availability_unknown_field_degrades_to_open() {
    let mut source = MockSource::new();

    source
        .expect_field_slots()
        .times(1)
        .returning(|_, _| Err(FieldbookError::Transport(eyre::eyre!("route missing"))));
    source
        .expect_availability_feed()
        .times(1)
        .returning(|_, _, _| {
            Ok(vec![FieldAvailability {
                field_id: 8,
                available_time_slots: Vec::new(),
            }])
        });

    let result = field_availability(&source, Tz::UTC, 4, day()).await;

    assert_eq!(result.slots.len(), SLOT_COUNT);
    assert!(result.slots.iter().all(|slot| slot.available));
}

#[tokio::test]
async fn test_field_availability_total_failure_opens_everything() {
    let mut source = MockSource::new();

    source
        .expect_field_slots()
        .times(1)
        .returning(|_, _| Err(FieldbookError::Transport(eyre::eyre!("route missing"))));
    source
        .expect_availability_feed()
        .times(1)
        .returning(|_, _, _| Err(FieldbookError::Transport(eyre::eyre!("feed offline"))));

    let result = field_availability(&source, Tz::UTC, 4, day()).await;

    assert_eq!(result.slots.len(), SLOT_COUNT);
    assert!(result.slots.iter().all(|slot| slot.available));
}
