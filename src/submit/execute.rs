//! Tracking pipeline: gate, parse, submit

use crate::config::TrackerConfig;
use crate::error::Result;
use crate::parse::{check_commit_message, first_line, Rejection};
use crate::submit::{EdgeFunctionService, Phase, ProgressCallback, SubmissionService};
use crate::types::{CommitContext, ServerAck, SubmissionRecord};
use std::fmt;
use tracing::{debug, info};

/// Why tracking stopped without submitting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Endpoint or credential not configured
    NoCredentials,
    /// No commit message supplied
    NoMessage,
    /// Message doesn't follow the submission grammar
    NotASubmission {
        /// First line of the message as received
        first_line: String,
        /// What the parser objected to
        reason: Rejection,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCredentials => write!(f, "no ingestion credentials configured"),
            Self::NoMessage => write!(f, "no commit message supplied"),
            Self::NotASubmission { reason, .. } => {
                write!(f, "commit message does not follow submission format ({reason})")
            }
        }
    }
}

/// Result of a tracking run that didn't fail
#[derive(Debug, Clone, PartialEq)]
pub enum TrackOutcome {
    /// Nothing was sent
    Skipped(SkipReason),
    /// Message parsed, submission suppressed by dry run
    DryRun(SubmissionRecord),
    /// Endpoint accepted the record
    Submitted {
        /// Record that was sent
        record: SubmissionRecord,
        /// Endpoint acknowledgement
        ack: ServerAck,
    },
}

impl TrackOutcome {
    /// Whether the run ended in a skip
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

/// Track one commit described by `config`
///
/// Missing credentials, a missing message, or a message that doesn't parse
/// end in [`TrackOutcome::Skipped`]. Delivery failures are errors.
pub async fn track_submission(
    config: &TrackerConfig,
    progress: &dyn ProgressCallback,
    dry_run: bool,
) -> Result<TrackOutcome> {
    let Some(credentials) = config.credentials() else {
        return Ok(skip(progress, SkipReason::NoCredentials).await);
    };

    let Some(message) = config.message() else {
        return Ok(skip(progress, SkipReason::NoMessage).await);
    };

    let context = config.context()?;
    progress.on_context(&context).await;

    let record = match parse_step(message, &context, progress).await {
        Ok(record) => record,
        Err(reason) => return Ok(skip(progress, reason).await),
    };

    if dry_run {
        return Ok(dry_run_outcome(record, progress).await);
    }

    let service = EdgeFunctionService::new(&credentials.endpoint, credentials.credential)?;
    submit_step(record, &service, progress).await
}

/// Parse `message` and submit it through `service`
///
/// Skips only when the message doesn't parse.
pub async fn deliver(
    message: &str,
    context: &CommitContext,
    service: &dyn SubmissionService,
    progress: &dyn ProgressCallback,
    dry_run: bool,
) -> Result<TrackOutcome> {
    let record = match parse_step(message, context, progress).await {
        Ok(record) => record,
        Err(reason) => return Ok(skip(progress, reason).await),
    };

    if dry_run {
        return Ok(dry_run_outcome(record, progress).await);
    }

    submit_step(record, service, progress).await
}

async fn parse_step(
    message: &str,
    context: &CommitContext,
    progress: &dyn ProgressCallback,
) -> std::result::Result<SubmissionRecord, SkipReason> {
    progress.on_phase(Phase::Parsing).await;

    match check_commit_message(message, context) {
        Ok(record) => {
            debug!(kind = %record.kind, title = %record.title, "parsed submission");
            progress.on_parsed(&record).await;
            Ok(record)
        }
        Err(reason) => Err(SkipReason::NotASubmission {
            first_line: first_line(message).to_string(),
            reason,
        }),
    }
}

async fn submit_step(
    record: SubmissionRecord,
    service: &dyn SubmissionService,
    progress: &dyn ProgressCallback,
) -> Result<TrackOutcome> {
    progress.on_phase(Phase::Submitting).await;

    let ack = service.submit(&record).await?;
    progress.on_submitted(&record, &ack).await;
    progress.on_phase(Phase::Complete).await;

    Ok(TrackOutcome::Submitted { record, ack })
}

async fn dry_run_outcome(
    record: SubmissionRecord,
    progress: &dyn ProgressCallback,
) -> TrackOutcome {
    progress.on_message("Dry run - submission not sent").await;
    progress.on_phase(Phase::Complete).await;
    TrackOutcome::DryRun(record)
}

async fn skip(progress: &dyn ProgressCallback, reason: SkipReason) -> TrackOutcome {
    info!(%reason, "skipping submission tracking");
    progress.on_skipped(&reason).await;
    TrackOutcome::Skipped(reason)
}
