//! End-to-end behaviour of the user endpoints through the assembled app.

use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use users_backend::doc::{ApiDocument, DocumentSource};
use users_backend::domain::UserDirectory;
use users_backend::inbound::http::state::HttpState;
use users_backend::outbound::memory::InMemoryUserRepository;
use users_backend::server::build_app;

fn state_for(repository: InMemoryUserRepository) -> web::Data<HttpState> {
    let directory = Arc::new(UserDirectory::new(Arc::new(repository)));
    let docs = ApiDocument::build(&DocumentSource::Generated, None).expect("document builds");
    web::Data::new(HttpState::new(directory.clone(), directory, docs))
}

#[fixture]
fn seeded() -> web::Data<HttpState> {
    state_for(InMemoryUserRepository::seeded())
}

#[rstest]
#[actix_web::test]
async fn crud_lifecycle(seeded: web::Data<HttpState>) {
    let app = test::init_service(build_app(seeded)).await;

    let listed: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/users").to_request())
            .await;
    assert_eq!(
        listed,
        json!([
            {"id": 1, "name": "John Doe", "email": "john@example.com"},
            {"id": 2, "name": "Jane Smith", "email": "jane@example.com"}
        ])
    );

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"name": "Bob", "email": "bob@example.com"}))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(created).await;
    assert_eq!(
        created,
        json!({"id": 3, "name": "Bob", "email": "bob@example.com"})
    );

    let fetched: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/users/3").to_request())
            .await;
    assert_eq!(fetched, created);

    let updated: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::put()
            .uri("/api/users/3")
            .set_json(json!({"name": "Robert", "email": "robert@example.com"}))
            .to_request(),
    )
    .await;
    assert_eq!(
        updated,
        json!({"id": 3, "name": "Robert", "email": "robert@example.com"})
    );

    let deleted = test::call_service(
        &app,
        test::TestRequest::delete().uri("/api/users/3").to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let gone = test::call_service(&app, test::TestRequest::get().uri("/api/users/3").to_request()).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(gone).await;
    assert_eq!(body, json!({"error": "User not found with id: 3"}));

    let after = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"name": "Carol", "email": "carol@example.com"}))
            .to_request(),
    )
    .await;
    let after: Value = test::read_body_json(after).await;
    assert_eq!(after.get("id"), Some(&json!(4)), "deleted ids are never reused");
}

#[actix_web::test]
async fn unseeded_store_starts_empty_and_counts_from_one() {
    let app = test::init_service(build_app(state_for(InMemoryUserRepository::new()))).await;

    let listed: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/users").to_request())
            .await;
    assert_eq!(listed, json!([]));

    let created: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"name": "First", "email": "first@example.com"}))
            .to_request(),
    )
    .await;
    assert_eq!(created.get("id"), Some(&json!(1)));
}

#[rstest]
#[case("/api/users")]
#[case("/api/users/1")]
#[case("/api-docs")]
#[case("/anything/else")]
#[actix_web::test]
async fn preflight_is_answered_everywhere(seeded: web::Data<HttpState>, #[case] uri: &str) {
    let app = test::init_service(build_app(seeded)).await;
    let res = test::call_service(
        &app,
        test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri(uri)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .and_then(|value| value.to_str().ok()),
        Some("GET, POST, PUT, DELETE, OPTIONS")
    );
    assert_eq!(test::read_body(res).await.as_ref(), b"OK");
}

#[rstest]
#[actix_web::test]
async fn documentation_endpoints_are_served(seeded: web::Data<HttpState>) {
    let app = test::init_service(build_app(seeded)).await;

    let doc: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api-docs").to_request())
            .await;
    let paths: Vec<&str> = doc
        .get("paths")
        .and_then(Value::as_object)
        .expect("document has paths")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(paths, ["/api/users", "/api/users/{id}"]);

    let page = test::call_service(&app, test::TestRequest::get().uri("/swagger-ui").to_request()).await;
    assert_eq!(page.status(), StatusCode::OK);
    assert_eq!(
        page.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/html; charset=utf-8")
    );
}

#[actix_web::test]
async fn concurrent_creates_receive_distinct_ids() {
    let state = state_for(InMemoryUserRepository::seeded());
    let app = test::init_service(build_app(state)).await;

    let requests = (0..20).map(|n| {
        test::call_and_read_body_json::<_, _, Value>(
            &app,
            test::TestRequest::post()
                .uri("/api/users")
                .set_json(json!({"name": format!("user-{n}"), "email": ""}))
                .to_request(),
        )
    });
    let created = futures_util::future::join_all(requests).await;

    let mut ids: Vec<i64> = created
        .iter()
        .filter_map(|user| user.get("id").and_then(Value::as_i64))
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (3..23).collect::<Vec<_>>());
}
