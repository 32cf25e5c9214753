use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;

use fieldbook_core::errors::FieldbookResult;
use fieldbook_core::models::availability::{AvailabilitySlots, FieldAvailability};
use fieldbook_core::models::booking::Booking;
use fieldbook_core::models::field::{BranchId, FieldId};

use crate::source::AvailabilitySource;

// Mock availability source for testing
mock! {
    pub Source {}

    #[async_trait]
    impl AvailabilitySource for Source {
        async fn availability_feed(
            &self,
            date: NaiveDate,
            branch: Option<BranchId>,
            field: Option<FieldId>,
        ) -> FieldbookResult<Vec<FieldAvailability>>;

        async fn field_slots(
            &self,
            field: FieldId,
            date: NaiveDate,
        ) -> FieldbookResult<AvailabilitySlots>;

        async fn user_bookings(&self) -> FieldbookResult<Vec<Booking>>;
    }
}
