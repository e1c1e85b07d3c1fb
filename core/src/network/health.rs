//! Gateway liveness probe.

use proxylist_common::error::{FetchError, Result};
use serde::Deserialize;
use tracing::debug;

use crate::ports::Transport;

pub const HEALTH_PATH: &str = "/gateway/health";

/// Body of `GET /gateway/health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthReport {
    pub status: String,
}

pub async fn probe(transport: &dyn Transport) -> Result<HealthReport> {
    let response = transport.get(HEALTH_PATH).await?;
    debug!(status = response.status, "Health probe answered");

    if !response.is_success() {
        return Err(FetchError::Status {
            code: response.status,
            reason: response.reason,
            detail: None,
        });
    }

    serde_json::from_slice(&response.body).map_err(|e| FetchError::Decode(e.to_string()))
}
