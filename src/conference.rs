//! Schedule API client.
//!
//! One `GET` against a fixed endpoint returning the whole conference
//! document. There is no pagination, authentication, retry or caching here;
//! the [`ConferenceStore`](crate::store::ConferenceStore) decides what a
//! result means for the rest of the app.

use crate::adapters::ReqwestHttpClient;
use crate::error::FetchError;
use crate::models::ConferenceData;
use crate::traits::{Headers, HttpClient};

pub const DEFAULT_ENDPOINT: &str = "https://sessionize.com/api/v2/7l5wob2t/view/All";

/// Client for the conference schedule endpoint.
pub struct ConferenceClient<C: HttpClient = ReqwestHttpClient> {
    /// Full URL of the schedule document
    pub endpoint: String,
    http: C,
}

impl ConferenceClient<ReqwestHttpClient> {
    /// Create a client for the default endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a client for a custom endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self::with_http(endpoint, ReqwestHttpClient::new())
    }
}

impl Default for ConferenceClient<ReqwestHttpClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HttpClient> ConferenceClient<C> {
    /// Create a client using a specific HTTP implementation.
    pub fn with_http(endpoint: impl Into<String>, http: C) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    /// Fetch and decode the conference document.
    pub async fn fetch(&self) -> Result<ConferenceData, FetchError> {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        tracing::info!("Fetching conference data from {}", self.endpoint);
        let response = self.http.get(&self.endpoint, &headers).await?;

        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
                body: response.text(),
            });
        }

        let data: ConferenceData = response.json()?;
        tracing::info!(
            "Loaded {} sessions, {} speakers, {} rooms",
            data.sessions.len(),
            data.speakers.len(),
            data.rooms.len()
        );
        Ok(data)
    }
}
