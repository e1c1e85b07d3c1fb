//! # Records
//!
//! Transient shapes returned by the proxied services. They live for one render
//! pass and are never written back.

pub mod product;
pub mod user;

pub use product::{Price, Product};
pub use user::User;
