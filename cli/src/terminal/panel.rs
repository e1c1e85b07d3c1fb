use std::sync::{Mutex, PoisonError};

use proxylist_core::ports::{ListItem, ListSink};

use crate::terminal::print;

/// A list sink that reprints its list every time the content is replaced.
///
/// Terminal output cannot be rewritten in place line by line here, so each
/// replacement is printed as a fresh block under the panel title.
pub struct TerminalList {
    title: &'static str,
    q_level: u8,
}

/// Serializes whole blocks so two panels never interleave their lines.
static OUTPUT: Mutex<()> = Mutex::new(());

impl TerminalList {
    pub fn new(title: &'static str, q_level: u8) -> Self {
        Self { title, q_level }
    }
}

impl ListSink for TerminalList {
    fn replace(&self, items: Vec<ListItem>) {
        let _guard = OUTPUT.lock().unwrap_or_else(PoisonError::into_inner);
        print::list(self.title, &items, self.q_level);
    }
}
