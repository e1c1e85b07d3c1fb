//! # Dashboard
//!
//! The user and product loaders side by side. They share the transport and
//! nothing else: each renders into its own sink, and a slow or failing one
//! never holds the other back.

use std::sync::Arc;

use proxylist_common::collection::{Products, Users};
use proxylist_common::config::RefreshPolicy;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::loader::{LoadOutcome, Loader};
use crate::ports::{ListSink, Transport};

/// A request to (re)load one or both lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Users,
    Products,
    All,
}

/// Outcomes of a start-up load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub users: LoadOutcome,
    pub products: LoadOutcome,
}

impl Summary {
    pub fn failures(&self) -> usize {
        [&self.users, &self.products]
            .iter()
            .filter(|outcome| outcome.is_failure())
            .count()
    }
}

#[derive(Clone)]
pub struct Dashboard {
    users: Loader<Users>,
    products: Loader<Products>,
}

impl Dashboard {
    pub fn new(
        transport: Arc<dyn Transport>,
        users_sink: Arc<dyn ListSink>,
        products_sink: Arc<dyn ListSink>,
        policy: RefreshPolicy,
    ) -> Self {
        Self {
            users: Loader::new(Arc::clone(&transport), users_sink, policy),
            products: Loader::new(transport, products_sink, policy),
        }
    }

    pub fn users(&self) -> &Loader<Users> {
        &self.users
    }

    pub fn products(&self) -> &Loader<Products> {
        &self.products
    }

    /// Loads both lists concurrently and waits for both.
    pub async fn load_all(&self) -> Summary {
        let (users, products) = tokio::join!(self.users.load(), self.products.load());
        Summary { users, products }
    }

    /// Starts the loads a trigger asks for as independent tasks.
    ///
    /// Nothing already in flight is cancelled.
    pub fn fire(&self, trigger: Trigger, tasks: &mut JoinSet<LoadOutcome>) {
        debug!(?trigger, "Trigger fired");
        if matches!(trigger, Trigger::Users | Trigger::All) {
            let loader = self.users.clone();
            tasks.spawn(async move { loader.load().await });
        }
        if matches!(trigger, Trigger::Products | Trigger::All) {
            let loader = self.products.clone();
            tasks.spawn(async move { loader.load().await });
        }
    }

    /// Loads both lists once, then serves triggers until the channel closes.
    ///
    /// Loads still running when the channel closes are awaited. Dropping the
    /// returned future aborts them instead.
    pub async fn run(&self, mut triggers: mpsc::Receiver<Trigger>) {
        let mut tasks: JoinSet<LoadOutcome> = JoinSet::new();
        self.fire(Trigger::All, &mut tasks);

        loop {
            tokio::select! {
                trigger = triggers.recv() => match trigger {
                    Some(trigger) => self.fire(trigger, &mut tasks),
                    None => break,
                },
                Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                    if let Err(e) = joined {
                        warn!(error = %e, "Load task ended abnormally");
                    }
                }
            }
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                warn!(error = %e, "Load task ended abnormally");
            }
        }
    }
}
