//! Typed records for the Clubhouse REST API.
//!
//! Response records ignore fields they do not name, but every field they do
//! require must be present or deserialization fails.

use std::fmt;

use serde::{Deserialize, Serialize};

pub type StoryId = i64;
pub type EpicId = i64;

/// Name given to the story created by `create_test_story`.
pub const TEST_STORY_NAME: &str = "TEST STORY";

/// Project the test story is filed under unless overridden.
pub const DEFAULT_PROJECT_ID: i64 = 299;

/// Opaque API credential, sent as the `token` query parameter.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(****)")
    }
}

/// A story as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Story {
    pub id: StoryId,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub epic_id: Option<EpicId>,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub owner_ids: Vec<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// An epic as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Epic {
    pub id: EpicId,
    #[serde(default)]
    pub name: Option<String>,
}

/// Body of a story creation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateStory {
    pub name: String,
    pub project_id: i64,
    pub owner_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_type: Option<StoryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<EpicId>,
}

impl CreateStory {
    pub fn new(name: impl Into<String>, project_id: i64) -> Self {
        Self {
            name: name.into(),
            project_id,
            owner_ids: Vec::new(),
            description: None,
            story_type: None,
            epic_id: None,
        }
    }

    /// The fixed-payload story used to smoke-test a token.
    pub fn test_story(project_id: i64) -> Self {
        Self::new(TEST_STORY_NAME, project_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum StoryType {
    Feature,
    Bug,
    Chore,
}

/// Filter body for `POST /stories/search`. Unset filters are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StorySearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<EpicId>,
}

impl StorySearch {
    pub fn archived() -> Self {
        Self {
            archived: Some(true),
            ..Default::default()
        }
    }

    pub fn in_epic(epic_id: EpicId) -> Self {
        Self {
            epic_id: Some(epic_id),
            ..Default::default()
        }
    }
}
