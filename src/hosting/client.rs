//! Source-hosting API client
//!
//! Minimal GitHub-style API client for fetching repository signal data.

use chrono::{DateTime, Utc};
use core::time::Duration;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// README metadata with only the fields we need
#[derive(Debug, Deserialize)]
pub struct Readme {
    /// Size of the README in bytes
    pub size: u64,
}

/// A single contributor entry; only its presence in the list matters
#[derive(Debug, Deserialize)]
pub struct Contributor {}

/// A single repository discussion; only its presence in the list matters
#[derive(Debug, Deserialize)]
pub struct Discussion {}

/// Minimal issue/PR info with only the fields we need
#[derive(Debug, Deserialize)]
pub struct Issue {
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub state: IssueState,
    pub pull_request: Option<PullRequestMarker>,
}

/// Issue state: open or closed
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

/// Marker type to detect if an issue is actually a pull request; the issues
/// endpoint attaches this object to PRs only, so presence is the signal.
#[derive(Debug, Deserialize)]
pub struct PullRequestMarker {}

/// Result of a hosting API call
#[derive(Debug)]
pub enum ApiResult<T> {
    /// Request succeeded and the payload was parsed
    Success(T),

    /// The requested resource was not found (404)
    NotFound,

    /// The requested feature is disabled or permanently gone (410)
    Gone,

    /// Request failed (network error, timeout, or any other HTTP error)
    Failed(ohno::AppError),
}

/// Hosting API client
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a new hosting API client.
    ///
    /// `token` is the bearer credential supplied out of band; `timeout`
    /// bounds every individual request so a hung API degrades a single
    /// metric instead of stalling the batch.
    pub fn new(token: &str, base_url: impl Into<String>, timeout: Duration) -> crate::Result<Self> {
        use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

        let mut auth_val = HeaderValue::from_str(&format!("Bearer {token}"))?;
        auth_val.set_sensitive(true);

        let mut headers = HeaderMap::new();
        let _ = headers.insert(AUTHORIZATION, auth_val);

        let client = reqwest::Client::builder()
            .user_agent("repo-trust")
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Get the base URL for this client
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make an API call and parse the JSON payload
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        match self.get(path).await {
            ApiResult::Success(resp) => match resp.json().await {
                Ok(data) => ApiResult::Success(data),
                Err(e) => ApiResult::Failed(e.into()),
            },
            ApiResult::NotFound => ApiResult::NotFound,
            ApiResult::Gone => ApiResult::Gone,
            ApiResult::Failed(e) => ApiResult::Failed(e),
        }
    }

    /// Make an API call where only the response status matters
    pub async fn get_status(&self, path: &str) -> ApiResult<()> {
        match self.get(path).await {
            ApiResult::Success(_) => ApiResult::Success(()),
            ApiResult::NotFound => ApiResult::NotFound,
            ApiResult::Gone => ApiResult::Gone,
            ApiResult::Failed(e) => ApiResult::Failed(e),
        }
    }

    /// Make an API call and classify the result
    async fn get(&self, path: &str) -> ApiResult<reqwest::Response> {
        let url = format!("{}{path}", self.base_url);

        let resp = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => return ApiResult::Failed(e.into()),
        };

        let status = resp.status();
        if status.is_success() {
            return ApiResult::Success(resp);
        }

        match status.as_u16() {
            404 => ApiResult::NotFound,
            410 => ApiResult::Gone,
            _ => {
                let error = resp.error_for_status().expect_err("status is not successful at this point");
                ApiResult::Failed(error.into())
            }
        }
    }
}
