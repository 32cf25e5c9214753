//! Availability feed endpoints.
//!
//! Both routes are consumed by the tiered operations in
//! [`crate::availability`]; callers wanting the degradation policy should
//! go through those instead of hitting the feed directly.

use chrono::NaiveDate;
use fieldbook_core::errors::{FieldbookError, FieldbookResult};
use fieldbook_core::models::availability::{AvailabilitySlots, FieldAvailability};
use fieldbook_core::models::field::{BranchId, FieldId};
use reqwest::Method;
use tracing::warn;

use crate::envelope::{self, AvailabilityFeedEnvelope, FieldSlotsEnvelope};
use crate::FieldbookClient;

impl FieldbookClient {
    /// Fetches the all-fields availability feed for a date, optionally
    /// filtered by branch or field.
    ///
    /// A feed that reports failure decodes to an empty list: the caller
    /// sees no per-field data rather than an error, matching how absent
    /// fields are treated.
    pub async fn availability_feed(
        &self,
        date: NaiveDate,
        branch: Option<BranchId>,
        field: Option<FieldId>,
    ) -> FieldbookResult<Vec<FieldAvailability>> {
        let mut query: Vec<(&str, String)> = vec![
            ("date", date.format("%Y-%m-%d").to_string()),
            ("noCache", "true".to_string()),
        ];
        if let Some(branch) = branch {
            query.push(("branchId", branch.to_string()));
        }
        if let Some(field) = field {
            query.push(("fieldId", field.to_string()));
        }

        let request = self
            .request(Method::GET, "/fields/availability")
            .query(&query);
        let body = self.fetch(request).await.map_err(FieldbookError::Transport)?;

        let feed = envelope::decode::<AvailabilityFeedEnvelope>(&body, "availability feed")?;
        Ok(feed.into_fields().unwrap_or_else(|| {
            warn!("Availability feed reported failure for {}", date);
            Vec::new()
        }))
    }

    /// Fetches the ready-made slot grid for one field and date.
    pub async fn field_slots(
        &self,
        field: FieldId,
        date: NaiveDate,
    ) -> FieldbookResult<AvailabilitySlots> {
        let query = [
            ("date", date.format("%Y-%m-%d").to_string()),
            ("noCache", "true".to_string()),
        ];
        let request = self
            .request(Method::GET, &format!("/fields/{}/availability", field))
            .query(&query);
        let body = self.fetch(request).await.map_err(FieldbookError::Transport)?;
        Ok(envelope::decode::<FieldSlotsEnvelope>(&body, "field slots")?.into_slots())
    }
}
