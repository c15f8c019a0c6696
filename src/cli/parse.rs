//! Parse command - show the record a commit message would produce

use crate::cli::style::{skip_mark, Stylize};
use anstream::println;
use track_submission::config::TrackerConfig;
use track_submission::error::Result;
use track_submission::parse::{check_commit_message, first_line, EXPECTED_FORMAT};

/// Run the parse command
///
/// Needs no credentials; absent commit context fields are left empty.
pub fn run_parse(config: &TrackerConfig) -> Result<()> {
    let Some(message) = config.message() else {
        println!("{} {}", skip_mark(), "No commit message supplied.".warn());
        return Ok(());
    };

    match check_commit_message(message, &config.context_lossy()) {
        Ok(record) => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Err(reason) => {
            println!("{} {}", skip_mark(), "Not a submission.".warn());
            println!("  Expected format: {}", EXPECTED_FORMAT.muted());
            println!("  Received: {}", first_line(message));
            println!("  Reason: {}", reason.muted());
        }
    }

    Ok(())
}
