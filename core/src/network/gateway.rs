use async_trait::async_trait;
use proxylist_common::config::{Config, join_url};
use proxylist_common::error::{FetchError, Result};
use reqwest::Client;
use reqwest::header::ACCEPT;
use tracing::trace;

use crate::ports::{RawResponse, Transport};

/// [`Transport`] talking HTTP to the API gateway.
#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let client: Client = Client::builder().timeout(cfg.timeout).build()?;
        Ok(Self::with_client(client, &cfg.base_url))
    }

    /// Wraps an already configured client, e.g. one that bypasses system proxies.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for GatewayClient {
    async fn get(&self, path: &str) -> Result<RawResponse> {
        let url: String = join_url(&self.base_url, path);
        trace!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::transport(&e))?;

        let status = response.status();
        let reason: String = status.canonical_reason().unwrap_or_default().to_string();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(&e))?;

        trace!(%url, status = status.as_u16(), bytes = body.len(), "Response received");

        Ok(RawResponse {
            status: status.as_u16(),
            reason,
            body: body.to_vec(),
        })
    }
}
