//! Event listing operations.

use reqwest::{header::LOCATION, StatusCode};
use serde::{Deserialize, Serialize};

use lexscopic_core::events::{EventRecord, FilterCriteria, Sections};

use super::{error_from_response, LexscopicClient};
use crate::error::{ClientError, Result};

/// Form body for `POST /api/events`. `None` fields are left out so the server
/// applies its defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubmitEventRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One row of the server's tag table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    pub tag: String,
    pub label: String,
    pub icon: String,
}

/// Path plus query string for a listing endpoint.
pub fn listing_path(path: &str, criteria: &FilterCriteria) -> String {
    let query = criteria.to_query_string();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

impl LexscopicClient {
    /// List visible events for the criteria.
    pub async fn list_events(&self, criteria: &FilterCriteria) -> Result<Vec<EventRecord>> {
        let response = self
            .client
            .get(self.url(&listing_path("/api/events", criteria)))
            .send()
            .await?;
        self.handle_response(response, "events").await
    }

    /// List visible events grouped into sections.
    pub async fn list_sections(&self, criteria: &FilterCriteria) -> Result<Sections> {
        let response = self
            .client
            .get(self.url(&listing_path("/api/events/sections", criteria)))
            .send()
            .await?;
        self.handle_response(response, "sections").await
    }

    /// Get an event by ID.
    pub async fn get_event(&self, id: &str) -> Result<EventRecord> {
        let response = self
            .client
            .get(self.url(&format!("/api/events/{id}")))
            .send()
            .await?;
        self.handle_response(response, &format!("event {id}")).await
    }

    /// Submit a new event.
    pub async fn submit_event(&self, request: &SubmitEventRequest) -> Result<EventRecord> {
        if request.title.trim().is_empty() {
            return Err(ClientError::InvalidInput("title is required".to_string()));
        }
        let response = self
            .client
            .post(self.url("/api/events"))
            .form(request)
            .send()
            .await?;
        self.handle_response(response, "events").await
    }

    /// The "Add to Google Calendar" link for an event.
    pub async fn calendar_link(&self, id: &str) -> Result<String> {
        let response = self
            .client
            .get(self.url(&format!("/events/{id}/calendar")))
            .send()
            .await?;

        if response.status() != StatusCode::SEE_OTHER {
            return Err(error_from_response(response, &format!("event {id}")).await);
        }

        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| ClientError::InvalidResponse("redirect without location".to_string()))
    }

    /// The server's tag lookup table.
    pub async fn list_tags(&self) -> Result<Vec<TagInfo>> {
        let response = self.client.get(self.url("/api/tags")).send().await?;
        self.handle_response(response, "tags").await
    }
}
