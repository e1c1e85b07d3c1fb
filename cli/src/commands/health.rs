use colored::*;
use proxylist_common::config::Config;
use proxylist_core::network::health;
use tracing::Instrument;

use crate::commands::gateway;
use crate::terminal::{print, spinner};

pub async fn health(cfg: &Config) -> anyhow::Result<()> {
    let transport = gateway(cfg)?;
    let report = health::probe(transport.as_ref())
        .instrument(spinner::loading_span("Asking the gateway..."))
        .await
        .map_err(|e| anyhow::anyhow!("gateway at {} is not healthy: {e}", cfg.base_url))?;

    print::print_status(format!(
        "{} {}",
        "Gateway status:".bold(),
        report.status.green()
    ));
    Ok(())
}
