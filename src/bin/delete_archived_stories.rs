//! Delete every archived story in a Clubhouse workspace.
//!
//! # Usage
//!
//! ```bash
//! delete_archived_stories <TOKEN>
//! delete_archived_stories <TOKEN> --config janitor.toml
//! ```

use std::process::ExitCode;

use clap::Parser;
use clubhouse_janitor::{
    cli::{self, CommonArgs},
    services::delete_archived_stories,
};

#[derive(Parser, Debug)]
#[command(name = "delete_archived_stories")]
#[command(version, about = "Delete all archived Clubhouse stories", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let client = match cli::bootstrap(&args.common) {
        Ok(client) => client,
        Err(e) => return cli::exit_code::<(), _>(Err(e)),
    };

    let mut stdout = std::io::stdout().lock();
    cli::exit_code(delete_archived_stories(&client, &mut stdout).await)
}
