//! Bulk housekeeping for the Clubhouse project-management API.
//!
//! The crate backs three small command-line utilities:
//!
//! - `create_test_story` creates a fixed "TEST STORY" to check a token works.
//! - `delete_archived_stories` deletes every archived story.
//! - `delete_empty_epics` deletes every epic that has no stories.
//!
//! The jobs live in [`services`] and talk to the API through
//! [`clubhouse::ClubhouseClient`]; the binaries only parse arguments, load
//! [`config`], start logging, and report the outcome.

#[cfg(feature = "cli")]
pub mod cli;
pub mod clubhouse;
pub mod config;
#[cfg(feature = "cli")]
pub mod observability;
pub mod services;

#[cfg(test)]
mod tests;
