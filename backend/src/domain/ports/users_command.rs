//! Driving port for mutating users.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// Write-side user use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a new user under a freshly allocated id.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Replace an existing user wholesale; fails with `NotFound` when absent.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error>;

    /// Delete a user; a repeated delete fails with `NotFound`.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
