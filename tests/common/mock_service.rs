//! Mock submission service and recording progress for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;
use track_submission::error::{Error, Result};
use track_submission::submit::{Phase, ProgressCallback, SkipReason, SubmissionService};
use track_submission::types::{CommitContext, ServerAck, SubmissionRecord};

/// Simple mock submission service
///
/// Features:
/// - Call tracking for verification
/// - Configurable acknowledgement
/// - Error injection for failure path testing
pub struct MockSubmissionService {
    submit_url: String,
    ack: Mutex<ServerAck>,
    // Call tracking
    submit_calls: Mutex<Vec<SubmissionRecord>>,
    // Error injection
    error_on_submit: Mutex<Option<(u16, String)>>,
}

impl MockSubmissionService {
    /// Create a mock that accepts every record
    pub fn new() -> Self {
        Self {
            submit_url: "https://mock.example/functions/v1/submit".to_string(),
            ack: Mutex::new(ServerAck(serde_json::json!({ "submission": { "id": "mock-1" } }))),
            submit_calls: Mutex::new(Vec::new()),
            error_on_submit: Mutex::new(None),
        }
    }

    /// Set the acknowledgement body returned by `submit`
    pub fn set_ack(&self, body: Value) {
        *self.ack.lock().unwrap() = ServerAck(body);
    }

    /// Make `submit` fail with a delivery error
    pub fn fail_submit(&self, status: u16, body: &str) {
        *self.error_on_submit.lock().unwrap() = Some((status, body.to_string()));
    }

    /// Get all records `submit` was called with
    pub fn get_submit_calls(&self) -> Vec<SubmissionRecord> {
        self.submit_calls.lock().unwrap().clone()
    }

    /// Assert that `submit` was never called
    pub fn assert_not_submitted(&self) {
        let calls = self.get_submit_calls();
        assert!(calls.is_empty(), "Expected no submit calls but got: {calls:?}");
    }
}

#[async_trait]
impl SubmissionService for MockSubmissionService {
    async fn submit(&self, record: &SubmissionRecord) -> Result<ServerAck> {
        self.submit_calls.lock().unwrap().push(record.clone());

        // Check for injected error
        if let Some((status, body)) = self.error_on_submit.lock().unwrap().as_ref() {
            return Err(Error::Delivery {
                status: *status,
                body: body.clone(),
            });
        }

        Ok(self.ack.lock().unwrap().clone())
    }

    fn submit_url(&self) -> &str {
        &self.submit_url
    }
}

/// Progress callback that records every event as a short string
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    /// Get all recorded events in order
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_phase(&self, phase: Phase) {
        self.record(format!("phase:{phase:?}"));
    }

    async fn on_context(&self, context: &CommitContext) {
        self.record(format!("context:{}", context.short_hash()));
    }

    async fn on_parsed(&self, record: &SubmissionRecord) {
        self.record(format!("parsed:{}", record.title));
    }

    async fn on_skipped(&self, reason: &SkipReason) {
        let kind = match reason {
            SkipReason::NoCredentials => "no-credentials",
            SkipReason::NoMessage => "no-message",
            SkipReason::NotASubmission { .. } => "not-a-submission",
        };
        self.record(format!("skipped:{kind}"));
    }

    async fn on_submitted(&self, _record: &SubmissionRecord, ack: &ServerAck) {
        self.record(format!(
            "submitted:{}",
            ack.submission_id().unwrap_or_default()
        ));
    }

    async fn on_message(&self, message: &str) {
        self.record(format!("message:{message}"));
    }
}
