use std::sync::Arc;

use proxylist_common::config::Config;
use proxylist_core::dashboard::{Dashboard, Trigger};
use tokio::sync::mpsc;
use tracing::debug;

use crate::commands::gateway;
use crate::terminal::input::{InputHandle, Key};
use crate::terminal::panel::TerminalList;
use crate::terminal::print;

pub async fn watch(cfg: &Config) -> anyhow::Result<()> {
    let dashboard = Dashboard::new(
        gateway(cfg)?,
        Arc::new(TerminalList::new("users", cfg.quiet)),
        Arc::new(TerminalList::new("products", cfg.quiet)),
        cfg.policy,
    );

    if cfg.quiet == 0 {
        print::print_status("Press 'u' for users, 'p' for products, 'r' for both, 'q' to quit");
    }

    let mut input: InputHandle = InputHandle::start();
    let (tx, rx) = mpsc::channel::<Trigger>(16);
    let runner = tokio::spawn(async move { dashboard.run(rx).await });

    loop {
        let key: Option<Key> = tokio::select! {
            key = input.next() => key,
            _ = tokio::signal::ctrl_c() => Some(Key::Quit),
        };

        let trigger: Trigger = match key {
            Some(Key::RefreshUsers) => Trigger::Users,
            Some(Key::RefreshProducts) => Trigger::Products,
            Some(Key::RefreshAll) => Trigger::All,
            Some(Key::Quit) => break,
            None => {
                tokio::signal::ctrl_c().await?;
                break;
            }
        };

        if tx.send(trigger).await.is_err() {
            break;
        }
    }

    debug!("Leaving watch mode");
    runner.abort();
    drop(input);

    if cfg.quiet == 0 {
        print::fat_separator();
    }
    Ok(())
}
