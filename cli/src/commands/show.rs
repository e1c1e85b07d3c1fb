use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::*;
use proxylist_common::config::Config;
use proxylist_core::dashboard::{Dashboard, Summary};
use proxylist_core::sink::MemoryList;
use tracing::Instrument;

use crate::commands::gateway;
use crate::pprint;
use crate::terminal::{colors, print, spinner};

pub async fn show(cfg: &Config) -> anyhow::Result<()> {
    let users: MemoryList = MemoryList::new();
    let products: MemoryList = MemoryList::new();
    let dashboard = Dashboard::new(
        gateway(cfg)?,
        Arc::new(users.clone()),
        Arc::new(products.clone()),
        cfg.policy,
    );

    let start_time: Instant = Instant::now();
    let summary: Summary = dashboard
        .load_all()
        .instrument(spinner::loading_span("Fetching users and products..."))
        .await;

    print::list("users", &users.items(), cfg.quiet);
    pprint!();
    print::list("products", &products.items(), cfg.quiet);
    print_summary(&summary, start_time.elapsed(), cfg);
    Ok(())
}

fn print_summary(summary: &Summary, total_time: Duration, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let users: ColoredString = format!("{} users", summary.users.record_count()).bold().green();
    let products: ColoredString =
        format!("{} products", summary.products.record_count()).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let mut output: String = format!("Loaded {users} and {products} in {total_time}");

    let failures: usize = summary.failures();
    if failures > 0 {
        output.push_str(&format!(" ({})", format!("{failures} failed").red().bold()));
    }

    print::fat_separator();
    print::centerln(&format!("{}", output.color(colors::TEXT_DEFAULT)));
}
