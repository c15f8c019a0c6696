//! Track command - parse the commit message and submit it

use crate::cli::progress::CliProgress;
use crate::cli::style::{cross, Stylize};
use anstream::eprintln;
use std::process::ExitCode;
use track_submission::config::TrackerConfig;
use track_submission::submit::track_submission;
use tracing::debug;

/// Run the track command
///
/// Skips exit successfully; any error ends the run with a failure code.
pub async fn run_track(config: &TrackerConfig, dry_run: bool) -> ExitCode {
    match track_submission(config, &CliProgress, dry_run).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "submission tracking failed");
            eprintln!("{} Failed to submit: {}", cross(), err.to_string().error());
            ExitCode::FAILURE
        }
    }
}
