//! Command-line plumbing shared by the housekeeping binaries.
//!
//! Each binary flattens [`CommonArgs`] into its own argument struct, calls
//! [`bootstrap`] to get a ready client, runs its job against stdout, and
//! hands the result to [`exit_code`].

use std::{fmt::Display, path::PathBuf, process::ExitCode};

use clap::Args;

use crate::{
    clubhouse::{
        ApiToken, ClubhouseClient, ClubhouseError, CreateStory, DEFAULT_PROJECT_ID, EpicId,
        StoryType,
    },
    config::{ConfigError, JanitorConfig},
    observability::{TracingError, init_tracing},
};

/// Arguments every housekeeping binary accepts.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Clubhouse API token
    pub token: String,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the API base URL (e.g. http://localhost:8080/api)
    #[arg(long)]
    pub base_url: Option<String>,
}

impl CommonArgs {
    /// Load the config file (or defaults) and apply command-line overrides.
    pub fn load_config(&self) -> Result<JanitorConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => JanitorConfig::from_file(path)?,
            None => JanitorConfig::default(),
        };

        match &self.base_url {
            Some(base_url) => config.with_base_url(base_url.as_str()),
            None => Ok(config),
        }
    }
}

/// Fields of the story filed by `create_test_story`.
#[derive(Args, Debug)]
pub struct TestStoryArgs {
    /// Project to file the test story under
    #[arg(long, default_value_t = DEFAULT_PROJECT_ID)]
    pub project_id: i64,

    /// Story description
    #[arg(long)]
    pub description: Option<String>,

    /// Story type
    #[arg(long, value_enum)]
    pub story_type: Option<StoryType>,

    /// Epic to attach the story to
    #[arg(long)]
    pub epic_id: Option<EpicId>,
}

impl TestStoryArgs {
    pub fn story(&self) -> CreateStory {
        CreateStory {
            description: self.description.clone(),
            story_type: self.story_type,
            epic_id: self.epic_id,
            ..CreateStory::test_story(self.project_id)
        }
    }
}

/// Startup errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tracing(#[from] TracingError),

    #[error("Failed to build API client: {0}")]
    Client(#[from] ClubhouseError),
}

/// Load configuration, start logging, and build the API client.
pub fn bootstrap(args: &CommonArgs) -> Result<ClubhouseClient, CliError> {
    let config = args.load_config()?;
    init_tracing(&config.logging)?;

    tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");

    let client = ClubhouseClient::new(&config.api, ApiToken::new(args.token.as_str()))?;
    Ok(client)
}

/// Map a job outcome to the process exit status, printing fatal errors to stderr.
pub fn exit_code<T, E: Display>(result: Result<T, E>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
