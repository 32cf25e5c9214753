//! HTTP plumbing shared by the endpoint wrappers.

use eyre::Result;
use reqwest::{Method, RequestBuilder, StatusCode};

use crate::FieldbookClient;

impl FieldbookClient {
    /// Builds a request against the configured backend, attaching the
    /// bearer token when one is configured.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.api_root(), path);
        let builder = self.http.request(method, url);
        match &self.config.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends a request and returns the response status and body text.
    pub(crate) async fn dispatch(&self, request: RequestBuilder) -> Result<(StatusCode, String)> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }

    /// Sends a request, treating any non-success status as an error.
    pub(crate) async fn fetch(&self, request: RequestBuilder) -> Result<String> {
        let (status, body) = self.dispatch(request).await?;
        if !status.is_success() {
            return Err(eyre::eyre!("backend returned {}: {}", status, body));
        }
        Ok(body)
    }
}
