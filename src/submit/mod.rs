//! Submission delivery
//!
//! Handles the tracking workflow for one commit:
//! 1. Gate - skip when credentials or the message are missing
//! 2. Parse - turn the message into a record, or skip
//! 3. Submit - post the record to the ingestion endpoint

mod edge;
mod execute;
mod payload;
mod progress;
mod service;

pub use edge::{submit_record, submit_url, EdgeFunctionService, SUBMIT_PATH};
pub use execute::{deliver, track_submission, SkipReason, TrackOutcome};
pub use payload::SubmissionPayload;
pub use progress::{NoopProgress, Phase, ProgressCallback};
pub use service::SubmissionService;
