use std::io::Write;

use super::JobResult;
use crate::clubhouse::{ApiVersion, ClubhouseClient, ClubhouseError, EpicId, StorySearch};

/// Outcome of an empty-epic sweep.
#[derive(Debug, Default)]
pub struct EpicSweepReport {
    /// Number of epics the listing returned.
    pub found: usize,
    /// Epics deleted because they had no stories, in deletion order.
    pub deleted: Vec<EpicId>,
    /// Epics left in place, with their story counts.
    pub kept: Vec<(EpicId, usize)>,
    pub failed: Vec<FailedEpic>,
}

/// The step at which processing an epic failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpicStage {
    /// Searching for the epic's stories. The epic is left untouched.
    Search,
    Delete,
}

#[derive(Debug)]
pub struct FailedEpic {
    pub id: EpicId,
    pub stage: EpicStage,
    pub error: ClubhouseError,
}

/// Delete every epic that has no stories.
///
/// Epics are processed one at a time in listing order: search for the epic's
/// stories, then delete the epic only if the search came back empty.
pub async fn delete_empty_epics(
    client: &ClubhouseClient,
    out: &mut impl Write,
) -> JobResult<EpicSweepReport> {
    let epics = client.list_epics().await?;
    let epic_ids: Vec<EpicId> = epics.iter().map(|e| e.id).collect();

    writeln!(out, "Found {} epics", epic_ids.len())?;

    let mut report = EpicSweepReport {
        found: epic_ids.len(),
        ..Default::default()
    };

    for id in epic_ids {
        let stories = match client
            .search_stories(ApiVersion::V1, &StorySearch::in_epic(id))
            .await
        {
            Ok(stories) => stories,
            Err(error) => {
                tracing::warn!(epic_id = id, error = %error, "Failed to search epic stories");
                writeln!(out, "Failed to search stories in epic #{id}: {error}")?;
                report.failed.push(FailedEpic {
                    id,
                    stage: EpicStage::Search,
                    error,
                });
                continue;
            }
        };

        writeln!(out, "Found {} stories in epic #{id}", stories.len())?;

        if !stories.is_empty() {
            report.kept.push((id, stories.len()));
            continue;
        }

        writeln!(out, "Deleting epic #{id}")?;
        match client.delete_epic(id).await {
            Ok(()) => report.deleted.push(id),
            Err(error) => {
                tracing::warn!(epic_id = id, error = %error, "Failed to delete epic");
                writeln!(out, "Failed to delete epic #{id}: {error}")?;
                report.failed.push(FailedEpic {
                    id,
                    stage: EpicStage::Delete,
                    error,
                });
            }
        }
    }

    tracing::info!(
        found = report.found,
        deleted = report.deleted.len(),
        kept = report.kept.len(),
        failed = report.failed.len(),
        "Empty epic sweep finished"
    );

    Ok(report)
}
