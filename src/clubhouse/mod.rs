//! Clubhouse REST API client.
//!
//! Covers the handful of endpoints the housekeeping jobs need. Every request
//! carries the API token as a `token` query parameter, and every response is
//! either parsed into a typed record or turned into a [`ClubhouseError`].

mod error;
mod models;
#[cfg(test)]
pub(crate) mod test_utils;

pub use error::*;
pub use models::*;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;

/// Version segment of an endpoint path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

/// Client for the Clubhouse REST API.
///
/// # Example
/// ```ignore
/// let client = ClubhouseClient::new(&ApiConfig::default(), ApiToken::new(token))?;
///
/// let archived = client
///     .search_stories(ApiVersion::V2, &StorySearch::archived())
///     .await?;
/// for story in &archived {
///     client.delete_story(story.id).await?;
/// }
/// ```
#[derive(Clone)]
pub struct ClubhouseClient {
    http_client: Client,
    base_url: String,
    token: ApiToken,
}

impl ClubhouseClient {
    /// Create a client for the API root in `config`.
    ///
    /// # Arguments
    /// * `config` - Base URL and request timeout
    /// * `token` - API token attached to every request
    pub fn new(config: &ApiConfig, token: ApiToken) -> ClubhouseResult<Self> {
        let http_client = Client::builder().timeout(config.timeout()).build()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            http_client,
            base_url,
            token,
        })
    }

    fn url(&self, version: ApiVersion, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, version.as_str(), path)
    }

    /// Create a story. Returns the raw response body.
    pub async fn create_story(&self, story: &CreateStory) -> ClubhouseResult<String> {
        let url = self.url(ApiVersion::V1, "stories");
        self.send(self.http_client.post(url).json(story)).await
    }

    /// Search stories matching `search`.
    pub async fn search_stories(
        &self,
        version: ApiVersion,
        search: &StorySearch,
    ) -> ClubhouseResult<Vec<Story>> {
        let url = self.url(version, "stories/search");
        let body = self.send(self.http_client.post(url).json(search)).await?;
        parse_body(body)
    }

    pub async fn delete_story(&self, id: StoryId) -> ClubhouseResult<()> {
        let url = self.url(ApiVersion::V2, &format!("stories/{id}"));
        self.send(self.http_client.delete(url)).await?;
        Ok(())
    }

    /// List every epic in the workspace.
    pub async fn list_epics(&self) -> ClubhouseResult<Vec<Epic>> {
        let url = self.url(ApiVersion::V1, "epics");
        let body = self.send(self.http_client.get(url)).await?;
        parse_body(body)
    }

    pub async fn delete_epic(&self, id: EpicId) -> ClubhouseResult<()> {
        let url = self.url(ApiVersion::V1, &format!("epics/{id}"));
        self.send(self.http_client.delete(url)).await?;
        Ok(())
    }

    /// Attach the token, execute, and return the body of a 2xx response.
    async fn send(&self, request: RequestBuilder) -> ClubhouseResult<String> {
        let request = request
            .query(&[("token", self.token.expose())])
            .build()?;

        // Log the path only; the query string carries the token.
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            "Clubhouse API call"
        );

        if !status.is_success() {
            return Err(ClubhouseError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

fn parse_body<T: DeserializeOwned>(body: String) -> ClubhouseResult<T> {
    match serde_json::from_str(&body) {
        Ok(value) => Ok(value),
        Err(source) => Err(ClubhouseError::Parse { source, body }),
    }
}
