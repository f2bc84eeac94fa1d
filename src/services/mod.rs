//! Housekeeping jobs run by the command-line utilities.
//!
//! Each job drives a [`ClubhouseClient`](crate::clubhouse::ClubhouseClient)
//! through a fixed, strictly sequential series of calls and writes one
//! progress line per step to the supplied writer. Failures on individual
//! items are reported and collected; failures that leave nothing to iterate
//! over are returned as errors.

pub mod archived_stories;
pub mod empty_epics;
pub mod test_story;

pub use archived_stories::{ArchivedStoryReport, FailedDeletion, delete_archived_stories};
pub use empty_epics::{EpicStage, EpicSweepReport, FailedEpic, delete_empty_epics};
pub use test_story::create_test_story;

use crate::clubhouse::ClubhouseError;

/// Error type for housekeeping jobs.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error(transparent)]
    Clubhouse(#[from] ClubhouseError),

    #[error("Failed to write progress output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for housekeeping jobs.
pub type JobResult<T> = Result<T, JobError>;
