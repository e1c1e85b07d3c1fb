//! # Proxylist Core
//!
//! Fetches collections through the gateway and renders them into list sinks.
//!
//! * **[`ports`]**: the two seams of a loader, where requests go ([`ports::Transport`])
//!   and where rendered lists land ([`ports::ListSink`]).
//! * **[`loader`]**: the Loading → Rendered state machine, generic over a collection.
//! * **[`dashboard`]**: the user and product loaders wired together, plus their triggers.
//! * **[`network`]**: the reqwest-backed gateway client and the health probe.
//! * **[`sink`]**: an in-memory list sink.

pub mod dashboard;
pub mod loader;
pub mod network;
pub mod ports;
pub mod sink;

#[cfg(test)]
mod testing;
