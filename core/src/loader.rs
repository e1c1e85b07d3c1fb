//! # Loader
//!
//! A [`Loader`] fetches one collection and renders it into the sink it owns.
//!
//! Every invocation walks the same two steps:
//!
//! 1. **Loading**: the sink is replaced by a single placeholder item.
//! 2. **Rendered**: the sink is replaced by one item per record, by the
//!    collection's "none found" item, or by a single error item.
//!
//! Failures never leave the loader. They are logged and rendered, and the
//! caller gets them back as [`LoadOutcome::Failed`] for reporting only.

use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use proxylist_common::collection::Collection;
use proxylist_common::config::RefreshPolicy;
use proxylist_common::error::{FetchError, Result};
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::ports::{ListItem, ListSink, Transport};

/// How one invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// This many records were rendered.
    Rendered(usize),
    /// The collection was empty; the fallback item was rendered.
    Empty,
    /// The fetch failed; the error item was rendered.
    Failed(FetchError),
    /// A newer invocation started meanwhile; nothing was rendered.
    Superseded,
}

impl LoadOutcome {
    pub fn record_count(&self) -> usize {
        match self {
            LoadOutcome::Rendered(count) => *count,
            _ => 0,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, LoadOutcome::Failed(_))
    }
}

pub struct Loader<C: Collection> {
    transport: Arc<dyn Transport>,
    sink: Arc<dyn ListSink>,
    policy: RefreshPolicy,
    /// Token of the most recent invocation.
    latest: Arc<AtomicU64>,
    collection: PhantomData<fn() -> C>,
}

impl<C: Collection> Clone for Loader<C> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            sink: Arc::clone(&self.sink),
            policy: self.policy,
            latest: Arc::clone(&self.latest),
            collection: PhantomData,
        }
    }
}

impl<C: Collection> Loader<C> {
    pub fn new(
        transport: Arc<dyn Transport>,
        sink: Arc<dyn ListSink>,
        policy: RefreshPolicy,
    ) -> Self {
        Self {
            transport,
            sink,
            policy,
            latest: Arc::new(AtomicU64::new(0)),
            collection: PhantomData,
        }
    }

    /// Runs one Loading → Rendered cycle.
    ///
    /// Clones share their invocation counter, so under
    /// [`RefreshPolicy::LatestRequestWins`] a call made through any clone
    /// supersedes pending calls made through the others.
    pub async fn load(&self) -> LoadOutcome {
        let token: u64 = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let endpoint: String = C::endpoint();

        self.sink.replace(vec![ListItem::placeholder(C::loading_text())]);
        debug!(collection = C::NOUN, %endpoint, token, "Fetching collection");

        let result: Result<Vec<C::Record>> =
            fetch_records::<C>(self.transport.as_ref(), &endpoint).await;

        if self.policy == RefreshPolicy::LatestRequestWins
            && self.latest.load(Ordering::SeqCst) != token
        {
            debug!(collection = C::NOUN, token, "Dropping response of an outdated request");
            return LoadOutcome::Superseded;
        }

        let (items, outcome) = render::<C>(result);
        report::<C>(&endpoint, &outcome);
        self.sink.replace(items);
        outcome
    }
}

/// GETs `endpoint` and decodes the body as a JSON array of `C::Record`.
pub async fn fetch_records<C: Collection>(
    transport: &dyn Transport,
    endpoint: &str,
) -> Result<Vec<C::Record>> {
    let response = transport.get(endpoint).await?;

    if !response.is_success() {
        return Err(FetchError::Status {
            code: response.status,
            reason: response.reason,
            detail: gateway_detail(&response.body),
        });
    }

    serde_json::from_slice(&response.body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Turns a fetch result into the list content and the matching outcome.
pub fn render<C: Collection>(result: Result<Vec<C::Record>>) -> (Vec<ListItem>, LoadOutcome) {
    match result {
        Ok(records) if records.is_empty() => {
            (vec![ListItem::empty(C::empty_text())], LoadOutcome::Empty)
        }
        Ok(records) => {
            let count: usize = records.len();
            let items: Vec<ListItem> = records
                .iter()
                .map(|record| ListItem::record(record.to_string()))
                .collect();
            (items, LoadOutcome::Rendered(count))
        }
        Err(err) => (
            vec![ListItem::error(C::error_text(&err))],
            LoadOutcome::Failed(err),
        ),
    }
}

fn report<C: Collection>(endpoint: &str, outcome: &LoadOutcome) {
    match outcome {
        LoadOutcome::Rendered(count) => {
            info!(collection = C::NOUN, %endpoint, count, "Rendered collection");
        }
        LoadOutcome::Empty => {
            info!(collection = C::NOUN, %endpoint, "Collection is empty");
        }
        LoadOutcome::Failed(err) => {
            if let FetchError::Status {
                code,
                detail: Some(detail),
                ..
            } = err
            {
                warn!(collection = C::NOUN, status = code, %detail, "Gateway reported an error");
            }
            error!(
                collection = C::NOUN,
                %endpoint,
                kind = err.kind(),
                error = %err,
                "Error fetching {}", C::NOUN
            );
        }
        LoadOutcome::Superseded => {}
    }
}

#[derive(Deserialize)]
struct GatewayErrorBody {
    message: Option<String>,
}

/// `message` of the gateway's JSON error body, if the body is one.
fn gateway_detail(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<GatewayErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
