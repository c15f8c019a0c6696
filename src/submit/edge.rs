//! Edge function submission service using reqwest

use crate::error::{Error, Result};
use crate::submit::{SubmissionPayload, SubmissionService};
use crate::types::{ServerAck, SubmissionRecord};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

/// Path of the ingestion function, relative to the endpoint base URL
pub const SUBMIT_PATH: &str = "/functions/v1/submit";

const USER_AGENT: &str = concat!("track-submission/", env!("CARGO_PKG_VERSION"));

/// Posts records to `{endpoint}/functions/v1/submit` with bearer auth
pub struct EdgeFunctionService {
    client: Client,
    submit_url: String,
    credential: String,
}

impl EdgeFunctionService {
    /// Create a service for an endpoint base URL and service credential
    pub fn new(endpoint: &str, credential: impl Into<String>) -> Result<Self> {
        let submit_url = submit_url(endpoint)?;

        // Transport defaults apply: no timeout override, no retries
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            submit_url,
            credential: credential.into(),
        })
    }
}

/// Build the submit URL for an endpoint base
///
/// The base must be an absolute http(s) URL; a trailing `/` is dropped.
pub fn submit_url(endpoint: &str) -> Result<String> {
    let base = endpoint.trim().trim_end_matches('/');
    let parsed = Url::parse(base).map_err(|e| Error::InvalidEndpoint(format!("{base}: {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::InvalidEndpoint(format!(
            "{base}: unsupported scheme {}",
            parsed.scheme()
        )));
    }

    Ok(format!("{base}{SUBMIT_PATH}"))
}

#[async_trait]
impl SubmissionService for EdgeFunctionService {
    async fn submit(&self, record: &SubmissionRecord) -> Result<ServerAck> {
        let payload = SubmissionPayload::from(record);
        debug!(url = %self.submit_url, kind = %record.kind, title = %record.title, "posting submission");

        let response = self
            .client
            .post(&self.submit_url)
            .bearer_auth(&self.credential)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            warn!(status = status.as_u16(), "ingestion endpoint rejected submission");
            return Err(Error::Delivery {
                status: status.as_u16(),
                body,
            });
        }

        let ack: ServerAck = response.json().await?;
        info!(id = ?ack.submission_id(), "submission accepted");
        Ok(ack)
    }

    fn submit_url(&self) -> &str {
        &self.submit_url
    }
}

/// Deliver a single record to `endpoint` using `credential`
pub async fn submit_record(
    record: SubmissionRecord,
    endpoint: &str,
    credential: &str,
) -> Result<ServerAck> {
    let service = EdgeFunctionService::new(endpoint, credential)?;
    service.submit(&record).await
}
