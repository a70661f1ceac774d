//! Users API handlers.
//!
//! ```text
//! GET    /api/users
//! POST   /api/users      {"name":"Ada","email":"ada@example.com"}
//! GET    /api/users/{id}
//! PUT    /api/users/{id} {"name":"Ada","email":"ada@example.com"}
//! DELETE /api/users/{id}
//! ```
//!
//! The `{id}` segment must be a base-10 `i64`. A malformed id answers 500
//! on `GET` and `DELETE` and 400 on `PUT`.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, User, UserDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::schemas::UserSchema;
use crate::inbound::http::state::HttpState;

/// Request body for creating or replacing a user.
///
/// Missing fields decode to empty strings; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct UserRequest {
    /// Full name.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Contact email address.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl From<UserRequest> for UserDraft {
    fn from(value: UserRequest) -> Self {
        Self::new(value.name, value.email)
    }
}

fn parse_user_id(raw: &str, code: ErrorCode) -> ApiResult<UserId> {
    raw.parse::<UserId>()
        .map_err(|err| Error::new(code, err.to_string()))
}

/// List every user in ascending id order.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use users_backend::inbound::http::users::list_users;
///
/// let app = App::new().service(web::scope("/api").service(list_users));
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    summary = "List all users",
    responses(
        (status = 200, description = "All users ordered by id", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "getAllUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    summary = "Get a user by id",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user", body = UserSchema),
        (status = 404, description = "No user with this id", body = ErrorResponse),
        (status = 500, description = "Malformed id or internal error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "getUserById"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path, ErrorCode::InternalError)?;
    let user = state.users.get_user(id).await?;
    Ok(web::Json(user))
}

/// Create a user under a freshly allocated id.
#[utoipa::path(
    post,
    path = "/api/users",
    summary = "Create a user",
    request_body = UserRequest,
    responses(
        (status = 201, description = "The created user", body = UserSchema),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let user = state
        .users_command
        .create_user(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(user))
}

/// Replace a user wholesale; previous field values are not merged.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    summary = "Replace a user",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "The updated user", body = UserSchema),
        (status = 400, description = "Malformed id or body", body = ErrorResponse),
        (status = 404, description = "No user with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path, ErrorCode::InvalidRequest)?;
    let user = state
        .users_command
        .update_user(id, payload.into_inner().into())
        .await?;
    Ok(web::Json(user))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    summary = "Delete a user",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "No user with this id", body = ErrorResponse),
        (status = 500, description = "Malformed id or internal error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path, ErrorCode::InternalError)?;
    state.users_command.delete_user(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
