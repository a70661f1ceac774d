//! User directory service.
//!
//! Implements the driving ports on top of a [`UserRepository`], turning
//! "absent" results into `NotFound` errors and storage failures into
//! internal errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use super::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use super::{Error, User, UserDraft, UserId};

/// Error returned for any lookup of an id the store does not hold.
#[must_use]
pub fn user_not_found(id: UserId) -> Error {
    Error::not_found(format!("User not found with id: {id}"))
}

fn map_persistence_error(err: UserPersistenceError) -> Error {
    error!(error = %err, "user repository failure");
    Error::internal(err.to_string())
}

/// Use-case service backing the user endpoints.
#[derive(Clone)]
pub struct UserDirectory {
    repository: Arc<dyn UserRepository>,
}

impl UserDirectory {
    /// Wrap a repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UsersQuery for UserDirectory {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository.list().await.map_err(map_persistence_error)
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| user_not_found(id))
    }
}

#[async_trait]
impl UsersCommand for UserDirectory {
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        let user = self
            .repository
            .create(draft)
            .await
            .map_err(map_persistence_error)?;
        debug!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error> {
        let user = self
            .repository
            .replace(id, draft)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| user_not_found(id))?;
        debug!(user_id = %id, "user replaced");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        self.repository
            .remove(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| user_not_found(id))?;
        debug!(user_id = %id, "user deleted");
        Ok(())
    }
}
