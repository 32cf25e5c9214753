//! Field type catalog endpoints.

use fieldbook_core::errors::{FieldbookError, FieldbookResult};
use fieldbook_core::models::field::{CreateFieldTypeRequest, FieldType, UpdateFieldTypeRequest};
use reqwest::Method;

use crate::envelope::{self, FieldTypeEnvelope, FieldTypesEnvelope};
use crate::FieldbookClient;

impl FieldbookClient {
    /// Fetches every configured field type.
    pub async fn field_types(&self) -> FieldbookResult<Vec<FieldType>> {
        let request = self.request(Method::GET, "/field-types");
        let body = self.fetch(request).await.map_err(FieldbookError::Transport)?;
        Ok(envelope::decode::<FieldTypesEnvelope>(&body, "field types")?.into_types())
    }

    /// Fetches a single field type by id.
    pub async fn field_type(&self, id: i64) -> FieldbookResult<FieldType> {
        let request = self.request(Method::GET, &format!("/field-types/{}", id));
        let body = self.fetch(request).await.map_err(FieldbookError::Transport)?;
        Ok(envelope::decode::<FieldTypeEnvelope>(&body, "field type")?.into_type())
    }

    /// Creates a field type with the given name.
    pub async fn create_field_type(&self, name: &str) -> FieldbookResult<FieldType> {
        if name.trim().is_empty() {
            return Err(FieldbookError::Validation(
                "field type name must not be empty".to_string(),
            ));
        }
        let payload = CreateFieldTypeRequest {
            name: name.to_string(),
        };
        let request = self.request(Method::POST, "/field-types").json(&payload);
        let body = self.fetch(request).await.map_err(FieldbookError::Transport)?;
        Ok(envelope::decode::<FieldTypeEnvelope>(&body, "created field type")?.into_type())
    }

    /// Renames a field type.
    pub async fn update_field_type(&self, id: i64, name: &str) -> FieldbookResult<FieldType> {
        if name.trim().is_empty() {
            return Err(FieldbookError::Validation(
                "field type name must not be empty".to_string(),
            ));
        }
        let payload = UpdateFieldTypeRequest {
            name: name.to_string(),
        };
        let request = self
            .request(Method::PUT, &format!("/field-types/{}", id))
            .json(&payload);
        let body = self.fetch(request).await.map_err(FieldbookError::Transport)?;
        Ok(envelope::decode::<FieldTypeEnvelope>(&body, "updated field type")?.into_type())
    }
}
