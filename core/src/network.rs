//! # Network Adapters
//!
//! Concrete [`Transport`](crate::ports::Transport) implementations and the
//! gateway endpoints that are not collections.

pub mod gateway;
pub mod health;

pub use gateway::GatewayClient;
