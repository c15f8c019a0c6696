//! CLI progress callback with styled output

use crate::cli::style::{check, hyperlink_url, skip_mark, Stream, Stylize};
use anstream::println;
use async_trait::async_trait;
use track_submission::parse::EXPECTED_FORMAT;
use track_submission::submit::{Phase, ProgressCallback, SkipReason};
use track_submission::types::{CommitContext, ServerAck, SubmissionRecord};

/// CLI progress callback that prints a report to stdout
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Parsing | Phase::Submitting => {
                println!("{}...", phase.to_string().emphasis());
            }
            Phase::Complete => {}
        }
    }

    async fn on_context(&self, context: &CommitContext) {
        println!("  Repository: {}", context.repository.accent());
        println!("  Branch: {}", context.branch.accent());
        println!("  Commit: {}", context.short_hash().accent());
    }

    async fn on_parsed(&self, record: &SubmissionRecord) {
        println!("{} Parsed submission:", check());
        println!("  Type: {}", record.kind.accent());
        println!("  Title: {}", record.title.emphasis());
        println!(
            "  Year: {}, Phase: {}, Week: {}",
            record.year.accent(),
            record.phase.accent(),
            record.week.accent()
        );
        println!("  Status: {}", record.status.accent());
    }

    async fn on_skipped(&self, reason: &SkipReason) {
        match reason {
            SkipReason::NoCredentials => {
                println!(
                    "{} {}",
                    skip_mark(),
                    "Missing ingestion credentials. Skipping submission tracking.".warn()
                );
                println!(
                    "  {}",
                    "Set SUPABASE_URL and SUPABASE_SERVICE_KEY secrets in your repository."
                        .muted()
                );
            }
            SkipReason::NoMessage => {
                println!(
                    "{} {}",
                    skip_mark(),
                    "No commit message found. Skipping submission tracking.".warn()
                );
            }
            SkipReason::NotASubmission { first_line, reason } => {
                println!(
                    "{} {}",
                    skip_mark(),
                    "Commit message does not follow submission format. Skipping.".warn()
                );
                println!("  Expected format: {}", EXPECTED_FORMAT.muted());
                println!("  Received: {first_line}");
                println!("  Reason: {}", reason.muted());
            }
        }
    }

    async fn on_submitted(&self, record: &SubmissionRecord, ack: &ServerAck) {
        println!("{} {}", check(), "Submission tracked successfully!".success());
        if let Some(id) = ack.submission_id() {
            println!("  ID: {}", id.accent());
        }
        println!("  {}", hyperlink_url(Stream::Stdout, &record.github_url));
    }

    async fn on_message(&self, message: &str) {
        println!("{}", message.muted());
    }
}
