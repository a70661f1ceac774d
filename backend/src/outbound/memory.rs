//! Process-lifetime user store.
//!
//! Users live in a `BTreeMap` behind an `RwLock`, so listing yields an
//! id-ordered snapshot for free and replace/remove are single critical
//! sections under the write lock. Ids come from an atomic counter that only
//! moves forward, independent of the map, so a deleted id is never handed
//! out again. The counter is advanced while the write lock is held, so a
//! listing never shows id `n + 1` before id `n`.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft, UserId};

type UserMap = BTreeMap<UserId, User>;

/// Users every fresh seeded store starts with.
#[must_use]
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(UserId::new(1), "John Doe", "john@example.com"),
        User::new(UserId::new(2), "Jane Smith", "jane@example.com"),
    ]
}

/// In-memory [`UserRepository`].
///
/// # Examples
/// ```
/// use users_backend::outbound::memory::InMemoryUserRepository;
/// use users_backend::domain::ports::UserRepository;
/// use users_backend::domain::UserDraft;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryUserRepository::seeded();
/// let user = store.create(UserDraft::new("Bob", "bob@x.com")).await.expect("create");
/// assert_eq!(user.id().get(), 3);
/// # });
/// ```
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: RwLock<UserMap>,
    last_id: AtomicI64,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    /// Empty store; the first id handed out is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Store pre-populated with [`seed_users`].
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    /// Store pre-populated with `users`; allocation resumes above the
    /// highest seeded id.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users: UserMap = users.into_iter().map(|user| (user.id(), user)).collect();
        let last_id = users
            .keys()
            .next_back()
            .map_or(0, |highest| highest.get().max(0));
        Self {
            users: RwLock::new(users),
            last_id: AtomicI64::new(last_id),
        }
    }

    fn allocate_id(&self) -> Result<UserId, UserPersistenceError> {
        self.last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
            .map(|previous| UserId::new(previous + 1))
            .map_err(|last| UserPersistenceError::IdSpaceExhausted { last })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, UserMap>, UserPersistenceError> {
        self.users
            .read()
            .map_err(|err| UserPersistenceError::poisoned(err.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, UserMap>, UserPersistenceError> {
        self.users
            .write()
            .map_err(|err| UserPersistenceError::poisoned(err.to_string()))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn find(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn create(&self, draft: UserDraft) -> Result<User, UserPersistenceError> {
        let mut users = self.write()?;
        let id = self.allocate_id()?;
        let user = User::from_draft(id, draft);
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn replace(
        &self,
        id: UserId,
        draft: UserDraft,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut users = self.write()?;
        let Some(slot) = users.get_mut(&id) else {
            return Ok(None);
        };
        let user = User::from_draft(id, draft);
        *slot = user.clone();
        Ok(Some(user))
    }

    async fn remove(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.write()?.remove(&id))
    }
}
