//! In-memory user management service.
//!
//! A hexagonal backend: [`domain`] holds the user model and its ports,
//! [`outbound`] the in-memory store, [`inbound`] the actix-web handlers,
//! and [`server`] wires them together behind the [`middleware`] stack.
//! [`doc`] produces the OpenAPI document served at `/api-docs`.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
