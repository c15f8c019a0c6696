//! Submission service trait

use crate::error::Result;
use crate::types::{ServerAck, SubmissionRecord};
use async_trait::async_trait;

/// Delivers submission records to an ingestion endpoint
///
/// The tracking pipeline only talks to this trait, so tests can swap in a
/// recording mock for the HTTP implementation.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Send one record. Exactly one delivery attempt is made.
    async fn submit(&self, record: &SubmissionRecord) -> Result<ServerAck>;

    /// Full URL records are posted to
    fn submit_url(&self) -> &str;
}
