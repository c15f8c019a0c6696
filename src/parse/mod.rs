//! Commit message parser
//!
//! Turns a commit message following the grammar
//!
//! ```text
//! [type] title year:N phase:P week:W status:S
//!
//! optional description lines
//! ```
//!
//! into a [`SubmissionRecord`]. The parser is pure and never errors: input
//! that doesn't follow the grammar yields `None` from
//! [`parse_commit_message`], or a [`Rejection`] describing why from
//! [`check_commit_message`].

mod header;
mod tags;

pub use header::{split_header, Header};
pub use tags::{scan_tags, title_end, HeaderTags, TagKey};

use crate::types::{CommitContext, SubmissionRecord, SubmissionStatus};
use thiserror::Error;
use tracing::debug;

/// Grammar shown to users whose commit message was skipped
pub const EXPECTED_FORMAT: &str = "[type] title year:N phase:P week:W status:S";

/// Why a commit message is not a submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Message is empty or whitespace only
    #[error("message is empty")]
    EmptyMessage,
    /// Header does not start with `[type]`
    #[error("header does not start with a [type] prefix")]
    MissingTypePrefix,
    /// Bracket holds something other than an accepted type
    #[error("unknown submission type: {0}")]
    UnknownType(String),
    /// Nothing follows the `[type]` prefix
    #[error("nothing follows the [type] prefix")]
    EmptyBody,
    /// A mandatory tag is absent (or, for `year`, not numeric)
    #[error("missing {0}: tag")]
    MissingTag(TagKey),
    /// `year:` digits don't fit a `u64`
    #[error("year out of range: {0}")]
    InvalidYear(String),
    /// No title text before the first tag
    #[error("title is empty")]
    EmptyTitle,
}

/// Parse a commit message into a submission record
///
/// Returns `None` when the message doesn't follow the grammar; the reason
/// is logged at debug level.
pub fn parse_commit_message(message: &str, context: &CommitContext) -> Option<SubmissionRecord> {
    match check_commit_message(message, context) {
        Ok(record) => Some(record),
        Err(reason) => {
            debug!(%reason, "commit message is not a submission");
            None
        }
    }
}

/// Parse a commit message, reporting why it was rejected
pub fn check_commit_message(
    message: &str,
    context: &CommitContext,
) -> Result<SubmissionRecord, Rejection> {
    let message = message.trim();
    if message.is_empty() {
        return Err(Rejection::EmptyMessage);
    }

    let mut lines = message.split('\n');
    let header_line = lines.next().unwrap_or_default().trim();
    let Header { kind, body } = split_header(header_line)?;

    let tags = scan_tags(body);
    let year = tags.year.ok_or(Rejection::MissingTag(TagKey::Year))?;
    let phase = tags.phase.ok_or(Rejection::MissingTag(TagKey::Phase))?;
    let week = tags.week.ok_or(Rejection::MissingTag(TagKey::Week))?;
    let year: u64 = year
        .parse()
        .map_err(|_| Rejection::InvalidYear(year.to_string()))?;

    let status = match tags.status {
        Some(value) => SubmissionStatus::from_tag(value).unwrap_or_else(|| {
            debug!(value, "unrecognized status, using default");
            SubmissionStatus::default()
        }),
        None => SubmissionStatus::default(),
    };

    let title = body[..title_end(body)].trim();
    if title.is_empty() {
        return Err(Rejection::EmptyTitle);
    }

    let description = lines.collect::<Vec<_>>().join("\n").trim().to_string();

    Ok(SubmissionRecord {
        kind,
        title: title.to_string(),
        description,
        year,
        phase: phase.to_string(),
        week: week.to_string(),
        status,
        repository: context.repository.clone(),
        branch: context.branch.clone(),
        commit_hash: context.commit_hash.clone(),
        github_url: context.github_url(),
    })
}

/// First line of a message as received, for skip reports
pub fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or_default()
}
