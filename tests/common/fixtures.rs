//! Test data factories for track-submission types

#![allow(dead_code)]

use track_submission::config::TrackerConfig;
use track_submission::types::{
    CommitContext, SubmissionRecord, SubmissionStatus, SubmissionType,
};

pub const TEST_REPOSITORY: &str = "octo/coursework";
pub const TEST_BRANCH: &str = "main";
pub const TEST_COMMIT: &str = "3f2a9c1d8e7b6a5f4e3d2c1b0a9f8e7d6c5b4a39";

/// Commit context used throughout the tests
pub fn make_context() -> CommitContext {
    CommitContext::new(TEST_REPOSITORY, TEST_BRANCH, TEST_COMMIT)
}

/// Commit URL for the test context
pub fn test_commit_url() -> String {
    format!("https://github.com/{TEST_REPOSITORY}/commit/{TEST_COMMIT}")
}

/// Create a record as the parser would for the test context
pub fn make_record(kind: SubmissionType, title: &str) -> SubmissionRecord {
    SubmissionRecord {
        kind,
        title: title.to_string(),
        description: String::new(),
        year: 2024,
        phase: "1".to_string(),
        week: "3".to_string(),
        status: SubmissionStatus::InProgress,
        repository: TEST_REPOSITORY.to_string(),
        branch: TEST_BRANCH.to_string(),
        commit_hash: TEST_COMMIT.to_string(),
        github_url: test_commit_url(),
    }
}

/// Fully populated tracker config pointing at `endpoint`
pub fn make_config(endpoint: &str, message: &str) -> TrackerConfig {
    TrackerConfig {
        endpoint: Some(endpoint.to_string()),
        credential: Some("service-key".to_string()),
        message: Some(message.to_string()),
        repository: Some(TEST_REPOSITORY.to_string()),
        branch: Some(TEST_BRANCH.to_string()),
        commit_hash: Some(TEST_COMMIT.to_string()),
    }
}
