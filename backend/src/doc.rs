//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! description of the REST API, and [`ApiDocument`], the rendered document
//! served at `/api-docs`. The document comes from one of two sources:
//!
//! - **Generated**: derived from the handler annotations in
//!   [`crate::inbound::http::users`] plus the schema wrappers.
//! - **File**: a declarative YAML or JSON document read at startup.
//!
//! Either way it is built once, before the server binds, and served from a
//! cached JSON rendering afterwards. A broken source is a startup failure.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use actix_web::web::Bytes;
use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;
use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiModel;
use utoipa::openapi::server::ServerBuilder;

use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::schemas::UserSchema;
use crate::inbound::http::users::UserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Management API",
        version = "1.0.0",
        description = "A simple API for managing users held in memory.",
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
    ),
    components(schemas(UserSchema, UserRequest, ErrorResponse)),
    tags(
        (name = "users", description = "User management operations")
    )
)]
pub struct ApiDoc;

/// Where the served document comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DocumentSource {
    /// The annotation-derived [`ApiDoc`].
    #[default]
    Generated,
    /// A YAML (`.yaml`/`.yml`) or JSON (`.json`) document on disk.
    File(PathBuf),
}

/// Failures while producing the document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document file could not be opened or read.
    #[error("failed to read OpenAPI document at {}: {source}", .path.display())]
    Read {
        /// Path to the document file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file contents are not a valid OpenAPI document.
    #[error("failed to parse OpenAPI document at {}: {message}", .path.display())]
    Parse {
        /// Path to the document file.
        path: PathBuf,
        /// Parser detail.
        message: String,
    },
    /// The file parsed but declares no operations.
    #[error("OpenAPI document at {} declares no paths", .path.display())]
    EmptyPaths {
        /// Path to the document file.
        path: PathBuf,
    },
    /// The document could not be rendered as JSON.
    #[error("failed to render OpenAPI document: {0}")]
    Render(#[from] serde_json::Error),
}

/// Built, immutable OpenAPI document plus its cached JSON rendering.
#[derive(Clone)]
pub struct ApiDocument {
    json: Bytes,
    document: Arc<OpenApiModel>,
}

impl ApiDocument {
    /// Build the document from `source`.
    ///
    /// When `server_url` is set it replaces the document's `servers` list,
    /// so clients resolve operations against the public address.
    ///
    /// # Errors
    /// Returns [`DocumentError`] when the file cannot be read or parsed,
    /// declares no paths, or the result cannot be rendered.
    ///
    /// # Examples
    /// ```
    /// use users_backend::doc::{ApiDocument, DocumentSource};
    ///
    /// let doc = ApiDocument::build(&DocumentSource::Generated, None).unwrap();
    /// assert!(doc.document().paths.paths.contains_key("/api/users"));
    /// ```
    pub fn build(source: &DocumentSource, server_url: Option<&str>) -> Result<Self, DocumentError> {
        let mut document = match source {
            DocumentSource::Generated => ApiDoc::openapi(),
            DocumentSource::File(path) => load_document(path)?,
        };

        if let Some(url) = server_url {
            document.servers = Some(vec![
                ServerBuilder::new()
                    .url(url)
                    .description(Some("Current server"))
                    .build(),
            ]);
        }

        let json = serde_json::to_vec(&document)?;
        info!(
            source = ?source,
            paths = document.paths.paths.len(),
            "OpenAPI document built"
        );
        Ok(Self {
            json: Bytes::from(json),
            document: Arc::new(document),
        })
    }

    /// Cached JSON rendering; cloning shares the buffer.
    #[must_use]
    pub fn json(&self) -> Bytes {
        self.json.clone()
    }

    /// Parsed document model.
    #[must_use]
    pub fn document(&self) -> &OpenApiModel {
        &self.document
    }
}

impl fmt::Debug for ApiDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiDocument")
            .field("title", &self.document.info.title)
            .field("bytes", &self.json.len())
            .finish()
    }
}

fn read_document(path: &Path) -> Result<String, DocumentError> {
    let read_error = |source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "document path must name a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    dir.read_to_string(Path::new(file_name)).map_err(read_error)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn load_document(path: &Path) -> Result<OpenApiModel, DocumentError> {
    let contents = read_document(path)?;
    let parse_error = |message: String| DocumentError::Parse {
        path: path.to_path_buf(),
        message,
    };
    let document: OpenApiModel = if is_json(path) {
        serde_json::from_str(&contents).map_err(|err| parse_error(err.to_string()))?
    } else {
        serde_yaml::from_str(&contents).map_err(|err| parse_error(err.to_string()))?
    };

    if document.paths.paths.is_empty() {
        return Err(DocumentError::EmptyPaths {
            path: path.to_path_buf(),
        });
    }
    Ok(document)
}
