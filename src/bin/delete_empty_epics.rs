//! Delete every Clubhouse epic that has no stories.
//!
//! # Usage
//!
//! ```bash
//! delete_empty_epics <TOKEN>
//! RUST_LOG=debug delete_empty_epics <TOKEN> --base-url http://localhost:8080/api
//! ```

use std::process::ExitCode;

use clap::Parser;
use clubhouse_janitor::{
    cli::{self, CommonArgs},
    services::delete_empty_epics,
};

#[derive(Parser, Debug)]
#[command(name = "delete_empty_epics")]
#[command(version, about = "Delete all Clubhouse epics without stories", long_about = None)]
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
    cli::exit_code(delete_empty_epics(&client, &mut stdout).await)
}
