//! Driving port for reading users.
//!
//! HTTP handlers depend on this trait rather than on a store so they stay
//! testable without wiring the real repository.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Read-side user use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// All users, ascending by id.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// One user, or [`crate::domain::ErrorCode::NotFound`].
    async fn get_user(&self, id: UserId) -> Result<User, Error>;
}
