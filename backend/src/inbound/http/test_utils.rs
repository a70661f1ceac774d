//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;

use crate::doc::{ApiDocument, DocumentSource};
use crate::domain::UserDirectory;
use crate::domain::ports::{UsersCommand, UsersQuery};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryUserRepository;

/// Generated document used by handler tests.
pub fn generated_document() -> ApiDocument {
    ApiDocument::build(&DocumentSource::Generated, None).expect("generated document builds")
}

/// State backed by a real directory over a store holding the two seed users.
pub fn seeded_state() -> web::Data<HttpState> {
    let directory = Arc::new(UserDirectory::new(Arc::new(
        InMemoryUserRepository::seeded(),
    )));
    web::Data::new(HttpState::new(
        directory.clone(),
        directory,
        generated_document(),
    ))
}

/// State wired to arbitrary port implementations, typically mocks.
pub fn state_with(
    users: impl UsersQuery + 'static,
    users_command: impl UsersCommand + 'static,
) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        Arc::new(users),
        Arc::new(users_command),
        generated_document(),
    ))
}
