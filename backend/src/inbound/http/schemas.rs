//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their shape and are registered under the domain
//! names so the document reads `User` rather than the wrapper name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Server-assigned identifier, unique and never reused.
    #[schema(example = 1)]
    id: i64,
    /// Full name.
    #[schema(example = "John Doe")]
    name: String,
    /// Contact email address.
    #[schema(example = "john@example.com")]
    email: String,
}
