//! Branch and date keyed cache of booked-slot maps.
//!
//! The fetch path never reads this cache. Every booked-slot fetch
//! invalidates its key first and stores the fresh answer afterwards, so
//! the cache only serves read-only consumers that want the last answer
//! without another round trip.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;
use fieldbook_core::models::availability::BookedSlotMap;
use fieldbook_core::models::field::BranchId;

#[derive(Debug, Default)]
pub struct AvailabilityCache {
    entries: Mutex<HashMap<(BranchId, NaiveDate), BookedSlotMap>>,
}

impl AvailabilityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the entry for exactly this branch and date, leaving every
    /// other key alone. Returns whether an entry was present.
    pub fn invalidate(&self, branch: BranchId, date: NaiveDate) -> bool {
        self.entries
            .lock()
            .expect("cache lock poisoned")
            .remove(&(branch, date))
            .is_some()
    }

    /// Stores the fetched map for a branch and date, replacing any
    /// previous entry.
    pub fn store(&self, branch: BranchId, date: NaiveDate, booked: BookedSlotMap) {
        self.entries
            .lock()
            .expect("cache lock poisoned")
            .insert((branch, date), booked);
    }

    /// A copy of the stored map for a branch and date, if present.
    pub fn get(&self, branch: BranchId, date: NaiveDate) -> Option<BookedSlotMap> {
        self.entries
            .lock()
            .expect("cache lock poisoned")
            .get(&(branch, date))
            .cloned()
    }
}
