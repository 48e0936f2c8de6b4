use async_trait::async_trait;
use reqwest::Client;

use crate::{Result, StatusCode};

/// Status and body of a finished request. The body is parsed by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Issues a single GET request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<RawResponse>;
}

/// The default transport, backed by `reqwest`.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self { Self::with_client(Client::new()) }

    pub fn with_client(client: Client) -> Self { HttpTransport { client } }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<RawResponse> {
        log::debug!("GET: {}", url);
        let response = self
            .client
            .get(url)
            .header("accept", "application/json")
            .query(query)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}
