use std::io::Write;

use super::JobResult;
use crate::clubhouse::{ApiVersion, ClubhouseClient, ClubhouseError, StoryId, StorySearch};

/// Outcome of an archived-story sweep.
#[derive(Debug, Default)]
pub struct ArchivedStoryReport {
    /// Number of archived stories the search returned.
    pub found: usize,
    /// Stories deleted, in deletion order.
    pub deleted: Vec<StoryId>,
    pub failed: Vec<FailedDeletion>,
}

#[derive(Debug)]
pub struct FailedDeletion {
    pub id: StoryId,
    pub error: ClubhouseError,
}

/// Delete every archived story.
///
/// A failed search is fatal and nothing is deleted. Each story is then
/// deleted in the order the search returned it; a failed delete is reported
/// and the sweep moves on to the next story.
pub async fn delete_archived_stories(
    client: &ClubhouseClient,
    out: &mut impl Write,
) -> JobResult<ArchivedStoryReport> {
    let stories = client
        .search_stories(ApiVersion::V2, &StorySearch::archived())
        .await?;

    tracing::debug!(
        ids = ?stories.iter().map(|s| s.id).collect::<Vec<_>>(),
        "Archived stories"
    );
    writeln!(out, "Found {} archived stories", stories.len())?;

    let mut report = ArchivedStoryReport {
        found: stories.len(),
        ..Default::default()
    };

    for story in &stories {
        writeln!(out, "Deleting Story #{}", story.id)?;

        match client.delete_story(story.id).await {
            Ok(()) => report.deleted.push(story.id),
            Err(error) => {
                tracing::warn!(story_id = story.id, error = %error, "Failed to delete story");
                writeln!(out, "Failed to delete story #{}: {error}", story.id)?;
                report.failed.push(FailedDeletion {
                    id: story.id,
                    error,
                });
            }
        }
    }

    tracing::info!(
        found = report.found,
        deleted = report.deleted.len(),
        failed = report.failed.len(),
        "Archived story sweep finished"
    );

    Ok(report)
}
