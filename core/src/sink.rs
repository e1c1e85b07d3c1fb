use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::ports::{ListItem, ListSink};

/// A list sink that keeps its content in memory.
///
/// Clones share the same content, so one handle can be given to a loader while
/// another is kept for reading.
#[derive(Debug, Clone, Default)]
pub struct MemoryList {
    items: Arc<Mutex<Vec<ListItem>>>,
    replacements: Arc<AtomicUsize>,
}

impl MemoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current content.
    pub fn items(&self) -> Vec<ListItem> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.items().into_iter().map(|item| item.text).collect()
    }

    /// How many times the content has been replaced so far.
    pub fn replacements(&self) -> usize {
        self.replacements.load(Ordering::SeqCst)
    }
}

impl ListSink for MemoryList {
    fn replace(&self, items: Vec<ListItem>) {
        let mut guard = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = items;
        self.replacements.fetch_add(1, Ordering::SeqCst);
    }
}
