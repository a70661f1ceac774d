//! Service entry-point: loads settings, builds the store and the OpenAPI
//! document, then serves the REST and documentation endpoints.

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use users_backend::doc::ApiDocument;
use users_backend::domain::UserDirectory;
use users_backend::inbound::http::state::HttpState;
use users_backend::server::{ServerConfig, create_server};
use users_backend::settings::ServiceSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let directory = Arc::new(UserDirectory::new(Arc::new(settings.user_repository())));

    // The server never starts with a broken document.
    let docs = ApiDocument::build(&settings.document_source(), settings.server_url.as_deref())
        .map_err(std::io::Error::other)?;

    let http_state = web::Data::new(HttpState::new(directory.clone(), directory, docs));
    let config = ServerConfig::new(settings.socket_addr()?);

    let base = format!("http://{}:{}", settings.host(), settings.port());
    info!(
        api = %format!("{base}/api/users"),
        docs = %format!("{base}/swagger-ui"),
        document = %format!("{base}/api-docs"),
        seeded = settings.seed_users(),
        "starting user service"
    );

    create_server(http_state, config)?.await
}
