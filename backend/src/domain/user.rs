//! User data model.
//!
//! A [`User`] is immutable once built. Updates never patch fields in place;
//! the store swaps in a whole new value carrying the same [`UserId`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when text cannot be read as a [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid user id \"{raw}\": expected a 64-bit integer")]
pub struct UserIdParseError {
    raw: String,
}

/// Server-assigned numeric user identifier.
///
/// # Examples
/// ```
/// use users_backend::domain::UserId;
///
/// let id: UserId = "42".parse().expect("numeric id");
/// assert_eq!(id.get(), 42);
/// assert!("forty-two".parse::<UserId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = UserIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self).map_err(|_| UserIdParseError {
            raw: s.to_owned(),
        })
    }
}

/// Caller-supplied user fields; the id is always assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    name: String,
    email: String,
}

impl UserDraft {
    /// Build a draft from its fields. Blank values are accepted.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Requested display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Requested email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Stored user record.
///
/// Serialises as `{"id": <int64>, "name": <string>, "email": <string>}`.
///
/// # Examples
/// ```
/// use users_backend::domain::{User, UserDraft, UserId};
///
/// let user = User::from_draft(UserId::new(3), UserDraft::new("Bob", "bob@x.com"));
/// assert_eq!(user.id(), UserId::new(3));
/// assert_eq!(user.name(), "Bob");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Build a user from its parts.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Materialise a draft under the given identifier.
    #[must_use]
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        let UserDraft { name, email } = draft;
        Self { id, name, email }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
