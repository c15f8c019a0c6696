//! track-submission - commit message submission tracking
//!
//! CLI binary that parses a tagged commit message and delivers it to the
//! ingestion endpoint. Designed to run as a CI step on every push.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use track_submission::config::TrackerConfig;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "track-submission")]
#[command(about = "Track tagged commit messages as submissions")]
#[command(version)]
struct Cli {
    /// Ingestion endpoint base URL [env: SUPABASE_URL]
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Service credential sent as bearer token [env: SUPABASE_SERVICE_KEY]
    #[arg(long, global = true)]
    credential: Option<String>,

    /// Commit message to parse [env: COMMIT_MESSAGE]
    #[arg(short, long, global = true)]
    message: Option<String>,

    /// Repository in owner/repo form [env: REPOSITORY, GITHUB_REPOSITORY]
    #[arg(long, global = true)]
    repository: Option<String>,

    /// Branch name [env: BRANCH, GITHUB_REF_NAME]
    #[arg(long, global = true)]
    branch: Option<String>,

    /// Full commit SHA [env: COMMIT_HASH, GITHUB_SHA]
    #[arg(long, global = true)]
    commit_hash: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the commit message and submit it (default)
    Track {
        /// Dry run - parse and report without submitting
        #[arg(long)]
        dry_run: bool,
    },

    /// Parse the commit message and print the record as JSON
    Parse,
}

impl Cli {
    fn overrides(&self) -> TrackerConfig {
        TrackerConfig {
            endpoint: self.endpoint.clone(),
            credential: self.credential.clone(),
            message: self.message.clone(),
            repository: self.repository.clone(),
            branch: self.branch.clone(),
            commit_hash: self.commit_hash.clone(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = TrackerConfig::from_env().merge(cli.overrides());

    let code = match cli.command {
        None => cli::run_track(&config, false).await,
        Some(Commands::Track { dry_run }) => cli::run_track(&config, dry_run).await,
        Some(Commands::Parse) => {
            cli::run_parse(&config)?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}
