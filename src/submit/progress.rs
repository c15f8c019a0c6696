//! Progress callback trait for interface-agnostic updates
//!
//! The tracking pipeline reports what it is doing through this trait so the
//! CLI can print a styled report while tests stay silent.

use crate::submit::SkipReason;
use crate::types::{CommitContext, ServerAck, SubmissionRecord};
use async_trait::async_trait;
use std::fmt;

/// Tracking phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Parsing the commit message
    Parsing,
    /// Sending the record to the endpoint
    Submitting,
    /// Tracking finished
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsing => write!(f, "Parsing commit message"),
            Self::Submitting => write!(f, "Submitting"),
            Self::Complete => write!(f, "Done"),
        }
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates while tracking.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called once the commit context is known
    async fn on_context(&self, context: &CommitContext);

    /// Called when the message parsed into a record
    async fn on_parsed(&self, record: &SubmissionRecord);

    /// Called when tracking stops without submitting
    async fn on_skipped(&self, reason: &SkipReason);

    /// Called when the endpoint accepted the record
    async fn on_submitted(&self, record: &SubmissionRecord, ack: &ServerAck);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_context(&self, _context: &CommitContext) {}
    async fn on_parsed(&self, _record: &SubmissionRecord) {}
    async fn on_skipped(&self, _reason: &SkipReason) {}
    async fn on_submitted(&self, _record: &SubmissionRecord, _ack: &ServerAck) {}
    async fn on_message(&self, _message: &str) {}
}
