use std::sync::Arc;

use proxylist_common::collection::Collection;
use proxylist_common::config::Config;
use proxylist_core::loader::Loader;
use proxylist_core::sink::MemoryList;
use tracing::Instrument;

use crate::commands::gateway;
use crate::terminal::{print, spinner};

/// Runs the loader of one collection and prints its list.
pub async fn list<C: Collection>(cfg: &Config) -> anyhow::Result<()> {
    let items: MemoryList = MemoryList::new();
    let loader: Loader<C> = Loader::new(gateway(cfg)?, Arc::new(items.clone()), cfg.policy);

    loader
        .load()
        .instrument(spinner::loading_span(&C::loading_text()))
        .await;

    print::list(C::NOUN, &items.items(), cfg.quiet);
    Ok(())
}
