//! Outbound JSON body for the ingestion endpoint

use crate::types::{SubmissionRecord, SubmissionStatus, SubmissionType};
use serde::Serialize;

/// Request body posted to `/functions/v1/submit`
///
/// Mirrors [`SubmissionRecord`] field for field, except that `description`
/// is left out of the JSON entirely when blank.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload<'a> {
    /// Submission type
    #[serde(rename = "type")]
    pub kind: SubmissionType,
    /// Title
    pub title: &'a str,
    /// Description, omitted when blank
    #[serde(skip_serializing_if = "is_blank")]
    pub description: &'a str,
    /// Year
    pub year: u64,
    /// Phase
    pub phase: &'a str,
    /// Week
    pub week: &'a str,
    /// Status
    pub status: SubmissionStatus,
    /// Repository (`owner/repo`)
    pub repository: &'a str,
    /// Branch
    pub branch: &'a str,
    /// Commit SHA
    pub commit_hash: &'a str,
    /// Commit URL
    pub github_url: &'a str,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // signature required by serde
fn is_blank(value: &&str) -> bool {
    value.trim().is_empty()
}

impl<'a> From<&'a SubmissionRecord> for SubmissionPayload<'a> {
    fn from(record: &'a SubmissionRecord) -> Self {
        Self {
            kind: record.kind,
            title: &record.title,
            description: &record.description,
            year: record.year,
            phase: &record.phase,
            week: &record.week,
            status: record.status,
            repository: &record.repository,
            branch: &record.branch,
            commit_hash: &record.commit_hash,
            github_url: &record.github_url,
        }
    }
}
