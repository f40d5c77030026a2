//! HTTP transport seam
//!
//! [`CategoryStore`](crate::CategoryStore) needs exactly one capability from
//! the network: a plain GET returning a status and a body. [`Transport`]
//! captures that so tests (and embedders with their own client) can swap in
//! a different implementation. [`HttpTransport`] is the reqwest-backed default.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!("tasbihkit/", env!("CARGO_PKG_VERSION"));

/// Status and body of a completed GET
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Fetch-capable HTTP client
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET with no custom headers and no body
    ///
    /// Non-success statuses are returned as responses, not errors. `Err` is
    /// reserved for failures where no response arrived at all.
    async fn get(&self, url: &str) -> anyhow::Result<TransportResponse>;
}

/// reqwest-backed transport
///
/// Sets no timeout: a stalled connection stalls the caller.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: reqwest::Client,
}

impl HttpTransport {
    /// Create transport with a fresh connection pool
    pub fn new() -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { http_client })
    }

    /// Wrap an existing client (shares its pool and settings)
    pub fn from_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> anyhow::Result<TransportResponse> {
        let response = self.http_client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        tracing::trace!(url = %url, status, bytes = body.len(), "GET complete");

        Ok(TransportResponse::new(status, body.to_vec()))
    }
}
