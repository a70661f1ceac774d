//! API documentation endpoints.
//!
//! `/api-docs` serves the document built at startup. `/swagger-ui` serves a
//! fixed HTML page that loads the vendored Swagger UI bundle from
//! `/swagger-ui/{file}` and points it at `/api-docs`.

use std::sync::Arc;

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};
use utoipa_swagger_ui::Config;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Path the documentation page fetches the document from.
pub const DOCUMENT_PATH: &str = "/api-docs";

const SWAGGER_PAGE: &str = include_str!("../../../static/swagger-ui.html");

/// Serve the cached OpenAPI document as JSON.
#[get("/api-docs")]
pub async fn api_document(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(state.docs.json())
}

fn swagger_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(SWAGGER_PAGE)
}

/// Serve the documentation page.
#[get("/swagger-ui")]
pub async fn swagger_ui() -> HttpResponse {
    swagger_page()
}

/// Serve a vendored Swagger UI asset.
#[get("/swagger-ui/{file:.*}")]
pub async fn swagger_asset(path: web::Path<String>) -> ApiResult<HttpResponse> {
    let file = path.into_inner();
    if file.is_empty() {
        return Ok(swagger_page());
    }

    match utoipa_swagger_ui::serve(&file, Arc::new(Config::from(DOCUMENT_PATH))) {
        Ok(Some(asset)) => Ok(HttpResponse::Ok()
            .content_type(asset.content_type)
            .body(asset.bytes.into_owned())),
        Ok(None) => Err(Error::not_found(format!(
            "No documentation asset named {file}"
        ))),
        Err(err) => Err(Error::internal(format!(
            "failed to serve documentation asset {file}: {err}"
        ))),
    }
}
