//! HTTP client for the ticket service REST API.
//!
//! All endpoints live under `/api/tickets/`. The server is the single source
//! of truth: every write returns the authoritative ticket, and clients patch
//! their local state from the response rather than predicting it.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use url::Url;

use crate::api::TicketFilter;
use crate::config::Config;
use crate::error::{Result, TriageError};
use crate::types::{Classification, Ticket, TicketDraft, TicketStats, TicketStatus};

/// Client for the remote ticket API
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client from configuration
    ///
    /// Configures the HTTP client with a 10s connect timeout and the
    /// config-driven total request timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let configured = config.api_url();
        // A trailing slash makes Url::join append instead of replace, which
        // keeps any path prefix in the configured URL intact.
        let base = if configured.ends_with('/') {
            configured.clone()
        } else {
            format!("{configured}/")
        };
        let base_url = Url::parse(&base)
            .map_err(|e| TriageError::Config(format!("Invalid API URL '{configured}': {e}")))?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Resolve an API path against the base URL
    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| TriageError::Config(format!("Invalid API path '{path}': {e}")))
    }

    /// List tickets matching the filter
    ///
    /// Empty filter values are left out of the query string, so a default
    /// filter returns the complete list.
    pub async fn list_tickets(&self, filter: &TicketFilter) -> Result<Vec<Ticket>> {
        let url = self.endpoint("api/tickets/")?;
        let mut request = self.client.get(url);
        let query = filter.to_query();
        if !query.is_empty() {
            request = request.query(&query);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status, response.text().await.unwrap_or_default()));
        }

        Ok(response.json().await?)
    }

    /// Fetch aggregate ticket statistics
    pub async fn stats(&self) -> Result<TicketStats> {
        let url = self.endpoint("api/tickets/stats/")?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status, response.text().await.unwrap_or_default()));
        }

        Ok(response.json().await?)
    }

    /// Create a new ticket from a draft
    ///
    /// A non-success response is surfaced as [`TriageError::Validation`] with
    /// the response body passed through verbatim, so callers can show exactly
    /// what the server rejected.
    pub async fn create_ticket(&self, draft: &TicketDraft) -> Result<Ticket> {
        let url = self.endpoint("api/tickets/")?;
        let response = self.client.post(url).json(draft).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let payload = if body.is_empty() {
                format!("HTTP {status}")
            } else {
                body
            };
            return Err(TriageError::Validation(payload));
        }

        Ok(response.json().await?)
    }

    /// Ask the server to suggest a category and priority for a description
    ///
    /// Either suggestion may be absent; the server only fills in the fields
    /// it has confidence in.
    pub async fn classify(&self, description: &str) -> Result<Classification> {
        let url = self.endpoint("api/tickets/classify/")?;
        let response = self
            .client
            .post(url)
            .json(&serde_json::json!({ "description": description }))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status, response.text().await.unwrap_or_default()));
        }

        Ok(response.json().await?)
    }

    /// Update a ticket's status, returning the authoritative ticket
    pub async fn update_status(&self, id: u64, status: TicketStatus) -> Result<Ticket> {
        let url = self.endpoint(&format!("api/tickets/{id}/"))?;
        let response = self
            .client
            .patch(url)
            .json(&serde_json::json!({ "status": status }))
            .send()
            .await?;
        let http_status = response.status();
        if !http_status.is_success() {
            return Err(api_error(
                http_status,
                response.text().await.unwrap_or_default(),
            ));
        }

        Ok(response.json().await?)
    }
}

/// Map a non-success response to an API error
fn api_error(status: StatusCode, body: String) -> TriageError {
    let message = if body.is_empty() {
        status.to_string()
    } else {
        body
    };
    TriageError::Api {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(url: &str) -> ApiClient {
        let config = Config::default().with_api_url_override(Some(url.to_string()));
        ApiClient::from_config(&config).unwrap()
    }

    #[test]
    fn test_endpoint_from_bare_host() {
        let client = client_for("http://localhost:8000");
        let url = client.endpoint("api/tickets/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/tickets/");
    }

    #[test]
    fn test_endpoint_with_trailing_slash_base() {
        let client = client_for("http://localhost:8000/");
        let url = client.endpoint("api/tickets/stats/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/tickets/stats/");
    }

    #[test]
    fn test_endpoint_preserves_path_prefix() {
        let client = client_for("http://localhost:8000/helpdesk");
        let url = client.endpoint("api/tickets/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/helpdesk/api/tickets/");
    }

    #[test]
    fn test_endpoint_for_single_ticket() {
        let client = client_for("http://localhost:8000");
        let url = client.endpoint(&format!("api/tickets/{}/", 42)).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/tickets/42/");
    }

    #[test]
    fn test_invalid_base_url_is_a_config_error() {
        let config = Config::default().with_api_url_override(Some("not a url".to_string()));
        let result = ApiClient::from_config(&config);
        assert!(matches!(result, Err(TriageError::Config(_))));
    }

    #[test]
    fn test_api_error_uses_body_when_present() {
        let err = api_error(StatusCode::NOT_FOUND, "no such ticket".to_string());
        match err {
            TriageError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "no such ticket");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_falls_back_to_status_line() {
        let err = api_error(StatusCode::INTERNAL_SERVER_ERROR, String::new());
        match err {
            TriageError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "500 Internal Server Error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
