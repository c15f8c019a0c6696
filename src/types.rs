//! Core types for track-submission

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Git/GitHub context of the commit being tracked
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommitContext {
    /// Repository in `owner/repo` form
    pub repository: String,
    /// Branch name
    pub branch: String,
    /// Full commit SHA
    pub commit_hash: String,
}

impl CommitContext {
    /// Create a context from its parts
    pub fn new(
        repository: impl Into<String>,
        branch: impl Into<String>,
        commit_hash: impl Into<String>,
    ) -> Self {
        Self {
            repository: repository.into(),
            branch: branch.into(),
            commit_hash: commit_hash.into(),
        }
    }

    /// Abbreviated commit hash (first 7 characters)
    pub fn short_hash(&self) -> &str {
        self.commit_hash
            .char_indices()
            .nth(7)
            .map_or(self.commit_hash.as_str(), |(idx, _)| &self.commit_hash[..idx])
    }

    /// Web URL of the commit on GitHub
    pub fn github_url(&self) -> String {
        format!(
            "https://github.com/{}/commit/{}",
            self.repository, self.commit_hash
        )
    }
}

/// Kind of work a submission describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionType {
    /// Course assignment
    Assignment,
    /// Project work
    Project,
    /// Portfolio entry
    Portfolio,
    /// Notebook
    Notebook,
    /// Standalone code
    Code,
    /// Research work
    Research,
    /// Publication
    Publication,
}

impl SubmissionType {
    /// Every accepted type, in grammar order
    pub const ALL: [Self; 7] = [
        Self::Assignment,
        Self::Project,
        Self::Portfolio,
        Self::Notebook,
        Self::Code,
        Self::Research,
        Self::Publication,
    ];

    /// Wire name of this type
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assignment => "assignment",
            Self::Project => "project",
            Self::Portfolio => "portfolio",
            Self::Notebook => "notebook",
            Self::Code => "code",
            Self::Research => "research",
            Self::Publication => "publication",
        }
    }

    /// Look up a type by its tag text, ignoring case
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }
}

impl fmt::Display for SubmissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress state of a submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmissionStatus {
    /// Not started yet
    Planned,
    /// Work ongoing (used when no valid status is given)
    #[default]
    InProgress,
    /// Done
    Completed,
    /// Done and published
    Published,
}

impl SubmissionStatus {
    /// Every accepted status
    pub const ALL: [Self; 4] = [
        Self::Planned,
        Self::InProgress,
        Self::Completed,
        Self::Published,
    ];

    /// Wire name of this status
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Published => "published",
        }
    }

    /// Look up a status by its tag value, ignoring case
    pub fn from_tag(value: &str) -> Option<Self> {
        let value = value.to_lowercase();
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submission extracted from a commit message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    /// Submission type from the `[type]` prefix
    #[serde(rename = "type")]
    pub kind: SubmissionType,
    /// Header text before the first tag
    pub title: String,
    /// Lines after the header (may be empty)
    pub description: String,
    /// `year:` tag
    pub year: u64,
    /// `phase:` tag
    pub phase: String,
    /// `week:` tag
    pub week: String,
    /// `status:` tag, or the default
    pub status: SubmissionStatus,
    /// Repository in `owner/repo` form
    pub repository: String,
    /// Branch name
    pub branch: String,
    /// Full commit SHA
    pub commit_hash: String,
    /// Commit URL derived from repository and hash
    pub github_url: String,
}

/// Acknowledgement returned by the ingestion endpoint
///
/// The body is kept as raw JSON; only `submission.id` has a known meaning.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ServerAck(pub Value);

impl ServerAck {
    /// The `submission.id` field, if present (strings and numbers accepted)
    pub fn submission_id(&self) -> Option<String> {
        match self.0.pointer("/submission/id")? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }
}
