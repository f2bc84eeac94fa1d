use std::io::Write;

use super::JobResult;
use crate::clubhouse::{ClubhouseClient, CreateStory};

/// Create `story` and echo the raw response body.
///
/// `story` is normally [`CreateStory::test_story`], optionally with a
/// description, type, or epic filled in.
pub async fn create_test_story(
    client: &ClubhouseClient,
    story: &CreateStory,
    out: &mut impl Write,
) -> JobResult<String> {
    let body = client.create_story(story).await?;

    tracing::info!(project_id = story.project_id, "Created test story");
    writeln!(out, "{body}")?;

    Ok(body)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, method, path, query_param},
    };

    use super::*;
    use crate::{
        clubhouse::{ClubhouseError, DEFAULT_PROJECT_ID, StoryType, test_utils::client_for},
        services::JobError,
    };

    #[tokio::test]
    async fn test_prints_raw_response_body() {
        let server = MockServer::start().await;
        let response = r#"{"id":1001,"name":"TEST STORY","project_id":299}"#;
        Mock::given(method("POST"))
            .and(path("/v1/stories"))
            .and(query_param("token", "abc123"))
            .and(body_json(json!({
                "name": "TEST STORY",
                "project_id": 299,
                "owner_ids": []
            })))
            .respond_with(ResponseTemplate::new(201).set_body_string(response))
            .expect(1)
            .mount(&server)
            .await;

        let mut out = Vec::new();
        let body = create_test_story(
            &client_for(&server),
            &CreateStory::test_story(DEFAULT_PROJECT_ID),
            &mut out,
        )
            .await
            .unwrap();

        assert_eq!(body, response);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{response}\n"));
    }

    #[tokio::test]
    async fn test_project_override() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/stories"))
            .and(body_json(json!({
                "name": "TEST STORY",
                "project_id": 12,
                "owner_ids": []
            })))
            .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let mut out = Vec::new();
        create_test_story(&client_for(&server), &CreateStory::test_story(12), &mut out)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_optional_fields_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/stories"))
            .and(body_json(json!({
                "name": "TEST STORY",
                "project_id": 299,
                "owner_ids": [],
                "description": "Token check",
                "story_type": "chore",
                "epic_id": 4
            })))
            .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"id":8}"#))
            .expect(1)
            .mount(&server)
            .await;

        let story = CreateStory {
            description: Some("Token check".into()),
            story_type: Some(StoryType::Chore),
            epic_id: Some(4),
            ..CreateStory::test_story(DEFAULT_PROJECT_ID)
        };
        let mut out = Vec::new();
        create_test_story(&client_for(&server), &story, &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "{\"id\":8}\n");
    }

    #[tokio::test]
    async fn test_rejected_creation_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/stories"))
            .respond_with(
                ResponseTemplate::new(422).set_body_string(r#"{"message":"Unknown project"}"#),
            )
            .mount(&server)
            .await;

        let mut out = Vec::new();
        let err = create_test_story(
            &client_for(&server),
            &CreateStory::test_story(DEFAULT_PROJECT_ID),
            &mut out,
        )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            JobError::Clubhouse(ClubhouseError::Api { status: 422, .. })
        ));
        assert!(out.is_empty());
    }
}
