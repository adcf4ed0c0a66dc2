//! Goals API client for communicating with the Team Tracker REST service.
//!
//! Every failure is normalized into [`GoalClientError`], whose message is what
//! users see.

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

use team_tracker_core::constants::DEFAULT_REQUEST_TIMEOUT_MS;
use team_tracker_core::goals::{Goal, GoalClientTrait, GoalStatus, GoalUpdate, NewGoal};

use crate::error::{GoalClientError, Result};

/// Error body the API sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}

/// Client for the goals REST API.
#[derive(Debug, Clone)]
pub struct GoalsClient {
    client: reqwest::Client,
    base_url: String,
}

impl GoalsClient {
    /// Create a new goals client with the default request timeout.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The API base URL including its `/api` prefix
    ///   (e.g., "http://localhost:5000/api")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS))
    }

    /// Create a new goals client with an explicit request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| GoalClientError::request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn goals_url(&self) -> String {
        format!("{}/goals", self.base_url)
    }

    fn goal_url(&self, goal_id: &str) -> String {
        format!("{}/goals/{}", self.base_url, urlencoding::encode(goal_id))
    }

    /// Turn a non-success response into an API error.
    ///
    /// The message comes from the body's `error` field when present, else
    /// from the status text.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!("API error response ({}): {}", status, body);

        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("API Error: {}", status_text(status)));

        Err(GoalClientError::api(status.as_u16(), message))
    }

    /// Parse a JSON response body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        Self::parse_optional_response(response)
            .await?
            .ok_or_else(|| GoalClientError::request("Expected a response body but got none"))
    }

    /// Parse a JSON response body that the server may leave empty.
    async fn parse_optional_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Option<T>> {
        let response = Self::check_status(response).await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("API response ({}): {}", status, body);

        if body.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&body).map(Some).map_err(|e| {
            log::error!(
                "Failed to deserialize response. Body: {}, Error: {}",
                body,
                e
            );
            GoalClientError::request(format!("Failed to parse response: {}", e))
        })
    }

    /// List goals, optionally filtered by status.
    ///
    /// GET /goals?status=...
    pub async fn list_goals(&self, status: Option<GoalStatus>) -> Result<Vec<Goal>> {
        let mut request = self.client.get(self.goals_url());
        if let Some(status) = status {
            request = request.query(&[("status", status.as_str())]);
        }
        debug!("Listing goals (status filter: {:?})", status);

        let response = request.send().await?;
        Self::parse_response(response).await
    }

    /// Create a goal. The returned goal carries the server-assigned id.
    ///
    /// POST /goals
    pub async fn create_goal(&self, new_goal: &NewGoal) -> Result<Goal> {
        debug!("Creating goal: {:?}", new_goal);

        let response = self
            .client
            .post(self.goals_url())
            .json(new_goal)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Update the given fields of a goal.
    ///
    /// Returns `None` when the server replies without a body.
    ///
    /// PUT /goals/{id}
    pub async fn update_goal(&self, goal_id: &str, update: &GoalUpdate) -> Result<Option<Goal>> {
        debug!("Updating goal {}: {:?}", goal_id, update);

        let response = self
            .client
            .put(self.goal_url(goal_id))
            .json(update)
            .send()
            .await?;

        Self::parse_optional_response(response).await
    }

    /// Delete a goal.
    ///
    /// DELETE /goals/{id}
    pub async fn delete_goal(&self, goal_id: &str) -> Result<()> {
        debug!("Deleting goal {}", goal_id);

        let response = self.client.delete(self.goal_url(goal_id)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

#[async_trait]
impl GoalClientTrait for GoalsClient {
    async fn list_goals(
        &self,
        status: Option<GoalStatus>,
    ) -> team_tracker_core::Result<Vec<Goal>> {
        Ok(GoalsClient::list_goals(self, status).await?)
    }

    async fn create_goal(&self, new_goal: NewGoal) -> team_tracker_core::Result<Goal> {
        Ok(GoalsClient::create_goal(self, &new_goal).await?)
    }

    async fn update_goal(
        &self,
        goal_id: &str,
        update: GoalUpdate,
    ) -> team_tracker_core::Result<Option<Goal>> {
        Ok(GoalsClient::update_goal(self, goal_id, &update).await?)
    }

    async fn delete_goal(&self, goal_id: &str) -> team_tracker_core::Result<()> {
        Ok(GoalsClient::delete_goal(self, goal_id).await?)
    }
}

fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Status")
}
