//! HTTP-level tests for the `/users` resource.
//!
//! Stateful scenarios run against the in-memory store; call-verification
//! scenarios run against a mocked service.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use mockall::predicate::eq;
use roster_config::ServerConfig;
use roster_core::{RosterError, User, UserId};
use roster_repository::InMemoryUserRepository;
use roster_rest::{create_router, responses::JSON_UTF8, AppState};
use roster_service::{MockUserService, UserServiceImpl};
use std::sync::Arc;
use tower::ServiceExt;

fn seeded_app() -> Router {
    let repository = Arc::new(InMemoryUserRepository::seeded());
    let service = Arc::new(UserServiceImpl::new(repository));
    create_router(AppState::new(service), &ServerConfig::default())
}

fn mocked_app(service: MockUserService) -> Router {
    create_router(AppState::new(Arc::new(service)), &ServerConfig::default())
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_users(response: Response) -> Vec<User> {
    serde_json::from_str(&body_string(response).await).unwrap()
}

fn content_type(response: &Response) -> &str {
    response.headers()[header::CONTENT_TYPE].to_str().unwrap()
}

#[tokio::test]
async fn test_list_users_sorted_by_name() {
    let app = seeded_app();

    let response = get(&app, "/users").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), JSON_UTF8);
    let names: Vec<String> = body_users(response).await.into_iter().map(|u| u.name).collect();
    assert_eq!(
        names,
        vec!["Han Solo", "Leia Organa", "Luke Skywalker", "Obi-Wan Kenobi"]
    );
}

#[tokio::test]
async fn test_find_by_partial_name() {
    let app = seeded_app();

    let response = get(&app, "/users?name=walk").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_users(response).await, vec![User::new(1, "Luke Skywalker")]);
}

#[tokio::test]
async fn test_find_without_match_is_not_found() {
    let app = seeded_app();

    let response = get(&app, "/users?name=Vader").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(content_type(&response), JSON_UTF8);
    assert_eq!(body_string(response).await, r#"{"message":"No Users found."}"#);
}

#[tokio::test]
async fn test_find_with_empty_name_is_not_found() {
    let app = seeded_app();

    let response = get(&app, "/users?name=").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, r#"{"message":"No Users found."}"#);
}

#[tokio::test]
async fn test_empty_store_list_is_not_found() {
    let repository = Arc::new(InMemoryUserRepository::new());
    let service = Arc::new(UserServiceImpl::new(repository));
    let app = create_router(AppState::new(service), &ServerConfig::default());

    let response = get(&app, "/users").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_user() {
    let app = seeded_app();

    let response = get(&app, "/users/1").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), JSON_UTF8);
    assert_eq!(
        body_string(response).await,
        r#"{"id":1,"name":"Luke Skywalker"}"#
    );
}

#[tokio::test]
async fn test_get_missing_user_is_not_found() {
    let app = seeded_app();

    let response = get(&app, "/users/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, r#"{"message":"User not found."}"#);
}

#[tokio::test]
async fn test_get_user_with_non_integer_id_is_bad_request() {
    let app = seeded_app();

    let response = get(&app, "/users/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_user_then_find() {
    let app = seeded_app();

    let response = get(&app, "/users/add/Joe%20Blow").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), JSON_UTF8);
    assert!(body_string(response).await.is_empty());

    let response = get(&app, "/users?name=Joe%20Blow").await;
    let found = body_users(response).await;
    assert_eq!(found, vec![User::new(5, "Joe Blow")]);
}

#[tokio::test]
async fn test_remove_user_then_fetch() {
    let app = seeded_app();

    let response = get(&app, "/users/remove/2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.is_empty());

    assert_eq!(get(&app, "/users/2").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_users(get(&app, "/users").await).await.len(), 3);
}

#[tokio::test]
async fn test_remove_missing_user_is_ok() {
    let app = seeded_app();

    let response = get(&app, "/users/remove/42").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.is_empty());
    assert_eq!(body_users(get(&app, "/users").await).await.len(), 4);
}

#[tokio::test]
async fn test_list_sort_is_stable_on_equal_names() {
    let mut service = MockUserService::new();
    service.expect_list_users().times(1).returning(|| {
        Ok(vec![
            User::new(4, "Han"),
            User::new(2, "Ben"),
            User::new(1, "Han"),
            User::new(3, "Ben"),
        ])
    });
    let app = mocked_app(service);

    let users = body_users(get(&app, "/users").await).await;
    let ids: Vec<i64> = users.iter().map(|u| u.id.into_inner()).collect();

    assert_eq!(ids, vec![2, 3, 4, 1]);
}

#[tokio::test]
async fn test_list_calls_service_once() {
    let mut service = MockUserService::new();
    service
        .expect_list_users()
        .times(1)
        .returning(|| Ok(vec![User::new(1, "name1")]));
    service.expect_find_users().never();
    let app = mocked_app(service);

    assert_eq!(get(&app, "/users").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_search_calls_find_once_with_name() {
    let mut service = MockUserService::new();
    service
        .expect_find_users()
        .withf(|name| name == "some name")
        .times(1)
        .returning(|_| Ok(vec![User::new(1, "some name")]));
    service.expect_list_users().never();
    let app = mocked_app(service);

    let response = get(&app, "/users?name=some%20name").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_search_results_are_sorted_by_name() {
    let mut service = MockUserService::new();
    service
        .expect_find_users()
        .withf(|name| name == "x")
        .times(1)
        .returning(|_| {
            Ok(vec![
                User::new(3, "z"),
                User::new(1, "a"),
                User::new(2, "a"),
            ])
        });
    let app = mocked_app(service);

    let response = get(&app, "/users?name=x").await;

    assert_eq!(response.status(), StatusCode::OK);
    let ids: Vec<i64> = body_users(response)
        .await
        .iter()
        .map(|u| u.id.into_inner())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_repeated_name_uses_first_value() {
    let mut service = MockUserService::new();
    service
        .expect_find_users()
        .withf(|name| name == "walk")
        .times(1)
        .returning(|_| Ok(vec![User::new(1, "Luke Skywalker")]));
    let app = mocked_app(service);

    let response = get(&app, "/users?name=walk&name=Han").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_users(response).await, vec![User::new(1, "Luke Skywalker")]);
}

#[tokio::test]
async fn test_get_calls_service_once_with_id() {
    let mut service = MockUserService::new();
    service
        .expect_get_user()
        .with(eq(UserId::new(7)))
        .times(1)
        .returning(|_| Ok(Some(User::new(7, "name"))));
    let app = mocked_app(service);

    assert_eq!(get(&app, "/users/7").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_add_calls_service_once_with_name() {
    let mut service = MockUserService::new();
    service
        .expect_add_user()
        .withf(|name| name == "name")
        .times(1)
        .returning(|_| Ok(()));
    let app = mocked_app(service);

    assert_eq!(get(&app, "/users/add/name").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_remove_calls_service_once_with_id() {
    let mut service = MockUserService::new();
    service
        .expect_remove_user()
        .with(eq(UserId::new(1)))
        .times(1)
        .returning(|_| Ok(()));
    let app = mocked_app(service);

    assert_eq!(get(&app, "/users/remove/1").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_storage_fault_is_server_error() {
    let mut service = MockUserService::new();
    service
        .expect_add_user()
        .times(1)
        .returning(|_| Err(RosterError::Database("database is locked".to_string())));
    let app = mocked_app(service);

    let response = get(&app, "/users/add/name").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_string(response).await,
        r#"{"message":"Database error: database is locked"}"#
    );
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = seeded_app();

    assert_eq!(get(&app, "/health").await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/live").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = seeded_app();

    let response = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(doc["paths"]["/users"].is_object());
}
