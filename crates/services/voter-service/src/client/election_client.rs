//! HTTP client for the election service.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use common::HttpClientConfig;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Failure talking to the election service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElectionClientError {
    /// No response at all: connection refused, DNS failure, timeout
    #[error("election service unreachable: {0}")]
    Unreachable(String),

    /// The service answered with a non-success status
    #[error("election service responded with status {status}")]
    Remote { status: u16 },

    /// The service answered 2xx but not with a vote count
    #[error("invalid vote count from election service: {0}")]
    InvalidPayload(String),
}

impl ElectionClientError {
    /// True when the remote side reported an internal failure.
    pub fn is_internal_remote_error(&self) -> bool {
        matches!(self, ElectionClientError::Remote { status: 500 })
    }
}

/// Election service operations needed by the voter service.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ElectionClient: Send + Sync {
    /// Number of votes cast by the voter
    async fn count_votes_by_voter_id(&self, voter_id: i64) -> Result<i64, ElectionClientError>;
}

/// reqwest-based client for the election service REST API.
pub struct HttpElectionClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpElectionClient {
    /// Build a client for the configured endpoint.
    pub fn new(config: &HttpClientConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn votes_url(&self, voter_id: i64) -> String {
        format!("{}/v1/vote/voter/{}", self.base_url, voter_id)
    }
}

#[async_trait]
impl ElectionClient for HttpElectionClient {
    async fn count_votes_by_voter_id(&self, voter_id: i64) -> Result<i64, ElectionClientError> {
        let url = self.votes_url(voter_id);
        debug!(voter_id, url = %url, "Counting votes");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ElectionClientError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ElectionClientError::Remote {
                status: status.as_u16(),
            });
        }

        response
            .json::<i64>()
            .await
            .map_err(|e| ElectionClientError::InvalidPayload(e.to_string()))
    }
}
