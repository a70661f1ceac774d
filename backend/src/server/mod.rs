//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::inbound::http::docs::{api_document, swagger_asset, swagger_ui};
use crate::inbound::http::error::{json_config, route_not_found};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::middleware::{Cors, Trace};

/// Assemble the application: middleware, user routes, documentation routes
/// and the JSON fallback for unmatched requests.
///
/// # Examples
/// ```
/// use actix_web::web;
/// use users_backend::doc::{ApiDocument, DocumentSource};
/// use users_backend::domain::UserDirectory;
/// use users_backend::inbound::http::state::HttpState;
/// use users_backend::outbound::memory::InMemoryUserRepository;
/// use users_backend::server::build_app;
/// use std::sync::Arc;
///
/// let directory = Arc::new(UserDirectory::new(Arc::new(InMemoryUserRepository::seeded())));
/// let docs = ApiDocument::build(&DocumentSource::Generated, None).unwrap();
/// let state = web::Data::new(HttpState::new(directory.clone(), directory, docs));
/// let _app = build_app(state);
/// ```
pub fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(list_users)
        .service(create_user)
        .service(get_user)
        .service(update_user)
        .service(delete_user);

    App::new()
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Cors)
        .wrap(Trace)
        .service(api)
        .service(api_document)
        .service(swagger_ui)
        .service(swagger_asset)
        .default_service(web::to(route_not_found))
}

/// Construct an Actix HTTP server for `http_state`.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    http_state: web::Data<HttpState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, workers } = config;

    let server = HttpServer::new(move || build_app(http_state.clone()));
    let server = match workers {
        Some(workers) => server.workers(workers),
        None => server,
    };
    let server = server.bind(bind_addr)?;
    for addr in server.addrs() {
        info!(%addr, "listening");
    }
    Ok(server.run())
}

#[cfg(test)]
mod tests {
    //! Whole-application behaviour: middleware ordering and fallbacks.

    use super::*;
    use crate::domain::TRACE_ID_HEADER;
    use crate::inbound::http::test_utils::seeded_state;
    use actix_web::http::header;
    use actix_web::http::{Method, StatusCode};
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case(Method::GET, "/api/users", StatusCode::OK)]
    #[case(Method::GET, "/api/users/99", StatusCode::NOT_FOUND)]
    #[case(Method::GET, "/nowhere", StatusCode::NOT_FOUND)]
    #[case(Method::PATCH, "/api/users/1", StatusCode::NOT_FOUND)]
    #[case(Method::OPTIONS, "/api/users/1", StatusCode::OK)]
    #[case(Method::DELETE, "/api/users/1", StatusCode::NO_CONTENT)]
    #[actix_web::test]
    async fn every_response_carries_cors_and_trace_headers(
        #[case] method: Method,
        #[case] uri: &str,
        #[case] expected: StatusCode,
    ) {
        let app = actix_test::init_service(build_app(seeded_state())).await;
        let req = actix_test::TestRequest::default()
            .method(method)
            .uri(uri)
            .to_request();
        let res = actix_test::call_service(&app, req).await;

        assert_eq!(res.status(), expected);
        let headers = res.headers();
        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("*")
        );
        assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
        assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_HEADERS));
        assert!(headers.contains_key(TRACE_ID_HEADER));
    }

    #[actix_web::test]
    async fn unmatched_routes_use_the_error_envelope() {
        let app = actix_test::init_service(build_app(seeded_state())).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/users").to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!({"error": "No route for GET /users"}));
    }

    #[actix_web::test]
    async fn error_responses_carry_a_trace_id() {
        let app = actix_test::init_service(build_app(seeded_state())).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/users/99").to_request(),
        )
        .await;

        let header = res
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .expect("trace id header present");
        assert_eq!(header.len(), 36, "trace id is a hyphenated UUID");
    }

    #[test]
    fn server_config_reports_its_bind_address() {
        let addr = "127.0.0.1:4567".parse().expect("valid socket address");
        let config = ServerConfig::new(addr).with_workers(2);
        assert_eq!(config.bind_addr(), addr);
        assert_eq!(config.workers, Some(2));
    }
}
