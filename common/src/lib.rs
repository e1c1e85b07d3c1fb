//! # Proxylist Common
//!
//! Types shared by every crate in the workspace.
//!
//! * **[`models`]**: the records served by the gateway (users, products).
//! * **[`collection`]**: descriptors tying a record type to its endpoint and list texts.
//! * **[`error`]**: the failure taxonomy of a single fetch.
//! * **[`config`]**: runtime configuration assembled by the CLI.

pub mod collection;
pub mod config;
pub mod error;
pub mod models;
