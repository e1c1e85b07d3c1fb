//! # Collections
//!
//! A [`Collection`] describes one list the client knows how to load: which
//! gateway path serves it, what record type it decodes into, and the texts
//! shown while loading, when empty, and on failure.
//!
//! Both loaders are the same code instantiated with a different collection.

use std::fmt::Display;

use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::models::{Product, User};

pub trait Collection: Send + Sync + 'static {
    /// Record decoded from each element of the JSON array.
    type Record: DeserializeOwned + Display + Send;

    /// Plural noun used in every text, e.g. `users`.
    const NOUN: &'static str;
    /// Service name the gateway proxies to.
    const SERVICE: &'static str;
    /// Resource path inside that service.
    const RESOURCE: &'static str;

    fn endpoint() -> String {
        format!("/proxy/{}/{}/", Self::SERVICE, Self::RESOURCE)
    }

    fn loading_text() -> String {
        format!("Loading {}...", Self::NOUN)
    }

    fn empty_text() -> String {
        format!("No {} found.", Self::NOUN)
    }

    fn error_text(err: &FetchError) -> String {
        format!("Error fetching {}: {}", Self::NOUN, err)
    }
}

/// The user list served by `users_service`.
pub struct Users;

impl Collection for Users {
    type Record = User;

    const NOUN: &'static str = "users";
    const SERVICE: &'static str = "users_service";
    const RESOURCE: &'static str = "users";
}

/// The product list served by `products_service`.
pub struct Products;

impl Collection for Products {
    type Record = Product;

    const NOUN: &'static str = "products";
    const SERVICE: &'static str = "products_service";
    const RESOURCE: &'static str = "products";
}
