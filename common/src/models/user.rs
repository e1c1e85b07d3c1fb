use std::fmt;

use serde::Deserialize;

/// A user as returned by `users_service`.
///
/// The service also sends timestamps and relationships; those are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Username: {}, Email: {}",
            self.id, self.username, self.email
        )
    }
}
