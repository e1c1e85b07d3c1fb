//! # Ports
//!
//! Loaders depend on these traits only. The CLI and the tests decide what sits
//! behind them.

use async_trait::async_trait;
use proxylist_common::error::Result;

/// A response as it came off the wire, before any status or body checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Status text, e.g. `Internal Server Error`. Empty when unknown.
    pub reason: String,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues GET requests against the gateway.
///
/// Implementations report a request that never completed as
/// [`FetchError::Transport`](proxylist_common::error::FetchError::Transport) and hand
/// every received response back untouched, whatever its status.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<RawResponse>;
}

/// What a list entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Placeholder,
    Record,
    Empty,
    Error,
}

/// One rendered line of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub kind: ItemKind,
    pub text: String,
}

impl ListItem {
    pub fn new(kind: ItemKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn placeholder(text: impl Into<String>) -> Self {
        Self::new(ItemKind::Placeholder, text)
    }

    pub fn record(text: impl Into<String>) -> Self {
        Self::new(ItemKind::Record, text)
    }

    pub fn empty(text: impl Into<String>) -> Self {
        Self::new(ItemKind::Empty, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(ItemKind::Error, text)
    }
}

/// The container a loader owns and renders into.
///
/// `replace` swaps the whole content in one step, so an observer never sees
/// items of two different renderings side by side.
pub trait ListSink: Send + Sync {
    fn replace(&self, items: Vec<ListItem>);
}
