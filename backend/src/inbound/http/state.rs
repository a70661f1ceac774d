//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::doc::ApiDocument;
use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub docs: ApiDocument,
}

impl HttpState {
    /// Construct state from the user ports and the prebuilt document.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use users_backend::doc::{ApiDocument, DocumentSource};
    /// use users_backend::domain::UserDirectory;
    /// use users_backend::inbound::http::state::HttpState;
    /// use users_backend::outbound::memory::InMemoryUserRepository;
    ///
    /// let directory = Arc::new(UserDirectory::new(Arc::new(InMemoryUserRepository::seeded())));
    /// let docs = ApiDocument::build(&DocumentSource::Generated, None).unwrap();
    /// let state = HttpState::new(directory.clone(), directory, docs);
    /// let _users = state.users.clone();
    /// ```
    pub fn new(
        users: Arc<dyn UsersQuery>,
        users_command: Arc<dyn UsersCommand>,
        docs: ApiDocument,
    ) -> Self {
        Self {
            users,
            users_command,
            docs,
        }
    }
}
