//! Field endpoints.
//!
//! Reads reject unrecognized envelope shapes; mutations additionally
//! propagate every transport failure since nothing can fall back for
//! them.

use fieldbook_core::errors::{FieldbookError, FieldbookResult};
use fieldbook_core::models::field::{
    BranchId, CreateFieldRequest, Field, FieldId, UpdateFieldRequest,
};
use reqwest::{Method, StatusCode};

use crate::envelope::{self, FieldEnvelope, FieldListEnvelope, MessageEnvelope};
use crate::FieldbookClient;

impl FieldbookClient {
    /// Fetches a single field by id.
    pub async fn field(&self, id: FieldId) -> FieldbookResult<Field> {
        let request = self.request(Method::GET, &format!("/fields/{}", id));
        let (status, body) = self
            .dispatch(request)
            .await
            .map_err(FieldbookError::Transport)?;

        if status == StatusCode::NOT_FOUND {
            return Err(FieldbookError::NotFound(format!("field {} not found", id)));
        }
        if !status.is_success() {
            return Err(FieldbookError::Transport(eyre::eyre!(
                "backend returned {}: {}",
                status,
                body
            )));
        }

        Ok(envelope::decode::<FieldEnvelope>(&body, "field")?.into_field())
    }

    /// Fetches the fields attached to one branch.
    pub async fn branch_fields(&self, branch: BranchId) -> FieldbookResult<Vec<Field>> {
        let request = self.request(Method::GET, &format!("/branches/{}/fields", branch));
        let body = self.fetch(request).await.map_err(FieldbookError::Transport)?;
        Ok(envelope::decode::<FieldListEnvelope>(&body, "branch fields")?.into_fields())
    }

    /// Creates a field.
    pub async fn create_field(&self, payload: &CreateFieldRequest) -> FieldbookResult<Field> {
        if payload.name.trim().is_empty() {
            return Err(FieldbookError::Validation(
                "field name must not be empty".to_string(),
            ));
        }
        let request = self.request(Method::POST, "/fields").json(payload);
        let body = self.fetch(request).await.map_err(FieldbookError::Transport)?;
        Ok(envelope::decode::<FieldEnvelope>(&body, "created field")?.into_field())
    }

    /// Updates a field. Absent payload members are left untouched by the
    /// backend.
    pub async fn update_field(
        &self,
        id: FieldId,
        payload: &UpdateFieldRequest,
    ) -> FieldbookResult<Field> {
        let request = self
            .request(Method::PUT, &format!("/fields/{}", id))
            .json(payload);
        let body = self.fetch(request).await.map_err(FieldbookError::Transport)?;
        Ok(envelope::decode::<FieldEnvelope>(&body, "updated field")?.into_field())
    }

    /// Deletes a field and returns the backend's acknowledgement message.
    pub async fn delete_field(&self, id: FieldId) -> FieldbookResult<String> {
        let request = self.request(Method::DELETE, &format!("/fields/{}", id));
        let body = self.fetch(request).await.map_err(FieldbookError::Transport)?;
        let ack = envelope::decode::<MessageEnvelope>(&body, "delete acknowledgement")?;
        Ok(ack.message)
    }
}
