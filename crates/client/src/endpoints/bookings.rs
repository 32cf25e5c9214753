//! Booking record endpoints.

use fieldbook_core::errors::{FieldbookError, FieldbookResult};
use fieldbook_core::models::booking::Booking;
use reqwest::Method;

use crate::envelope::{self, BookingListEnvelope};
use crate::FieldbookClient;

impl FieldbookClient {
    /// Fetches the caller's own booking records, every date included.
    pub async fn user_bookings(&self) -> FieldbookResult<Vec<Booking>> {
        let request = self.request(Method::GET, "/bookings");
        let body = self.fetch(request).await.map_err(FieldbookError::Transport)?;
        Ok(envelope::decode::<BookingListEnvelope>(&body, "user bookings")?.into_bookings())
    }
}
