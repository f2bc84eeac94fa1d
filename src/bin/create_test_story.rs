//! Create a single "TEST STORY" to check that a Clubhouse token works.
//!
//! # Usage
//!
//! ```bash
//! create_test_story <TOKEN>
//! create_test_story <TOKEN> --project-id 42
//! create_test_story <TOKEN> --story-type chore --epic-id 7 --description "Token check"
//! ```

use std::process::ExitCode;

use clap::Parser;
use clubhouse_janitor::{
    cli::{self, CommonArgs, TestStoryArgs},
    services::create_test_story,
};

#[derive(Parser, Debug)]
#[command(name = "create_test_story")]
#[command(version, about = "Create a test story in Clubhouse", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    story: TestStoryArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let client = match cli::bootstrap(&args.common) {
        Ok(client) => client,
        Err(e) => return cli::exit_code::<(), _>(Err(e)),
    };

    let mut stdout = std::io::stdout().lock();
    cli::exit_code(create_test_story(&client, &args.story.story(), &mut stdout).await)
}
