//! Driven port for user storage adapters and their errors.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{User, UserDraft, UserId};

/// Failures raised by user storage adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserPersistenceError {
    /// A writer panicked while holding the store lock.
    #[error("user store lock poisoned: {message}")]
    Poisoned { message: String },
    /// The id counter cannot advance without wrapping.
    #[error("user id space exhausted after {last}")]
    IdSpaceExhausted { last: i64 },
}

impl UserPersistenceError {
    /// Build a [`UserPersistenceError::Poisoned`].
    pub fn poisoned(message: impl Into<String>) -> Self {
        Self::Poisoned {
            message: message.into(),
        }
    }
}

/// Storage for user records keyed by [`UserId`].
///
/// Implementations must be safe to call from many request workers at once:
/// id allocation never hands out the same id twice (not even after a
/// delete), and `replace`/`remove` check for presence and mutate in one
/// critical section.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Snapshot of all users ordered by ascending id.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a single user.
    async fn find(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Allocate the next id and store the draft under it.
    async fn create(&self, draft: UserDraft) -> Result<User, UserPersistenceError>;

    /// Swap the stored user for `draft`, keeping `id`. `None` when absent.
    async fn replace(
        &self,
        id: UserId,
        draft: UserDraft,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Delete a user, returning what was removed. `None` when absent.
    async fn remove(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;
}
