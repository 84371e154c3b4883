//! End-to-end tests for the pizza HTTP surface, driven through the real
//! router with the in-memory store.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use pizza_store::{common_routes, docs_routes, pizza_routes, AppState, MemoryPizzaStore, Pizza};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let state = AppState::new(Arc::new(MemoryPizzaStore::new()));
    Router::new()
        .merge(pizza_routes(state.clone()))
        .merge(common_routes(state))
        .merge(docs_routes())
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, location, bytes.to_vec())
}

fn get_req(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete_req(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_req(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn root_greets_in_plain_text() {
    let app = app();
    let (status, _, body) = send(&app, get_req("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Hello World!".to_vec());
}

#[tokio::test]
async fn create_assigns_id_and_location_and_get_returns_equal_record() {
    let app = app();
    let (status, location, body) = send(
        &app,
        json_req(
            "POST",
            "/pizza",
            json!({"Name": "Margherita", "Description": "Classic"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Pizza = serde_json::from_slice(&body).unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Margherita");
    assert_eq!(created.description, "Classic");
    assert_eq!(location.as_deref(), Some("/pizza/1"));

    let (status, _, body) = send(&app, get_req("/pizza/1")).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: Pizza = serde_json::from_slice(&body).unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn client_supplied_id_on_create_is_ignored() {
    let app = app();
    let (status, location, body) = send(
        &app,
        json_req(
            "POST",
            "/pizza",
            json!({"Id": 42, "Name": "Diavola", "Description": "Hot salami"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Pizza = serde_json::from_slice(&body).unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(location.as_deref(), Some("/pizza/1"));
}

#[tokio::test]
async fn get_of_absent_id_returns_null() {
    let app = app();
    let (status, _, body) = send(&app, get_req("/pizza/7")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"null".to_vec());
}

#[tokio::test]
async fn update_overwrites_fields_and_is_idempotent() {
    let app = app();
    send(
        &app,
        json_req(
            "POST",
            "/pizza",
            json!({"Name": "Margherita", "Description": "Classic"}),
        ),
    )
    .await;

    let payload = json!({"Name": "Margherita", "Description": "Extra cheese"});
    let (status, _, body) = send(&app, json_req("PUT", "/pizza/1", payload.clone())).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (_, _, first) = send(&app, get_req("/pizza/1")).await;
    let fetched: Pizza = serde_json::from_slice(&first).unwrap();
    assert_eq!(fetched.description, "Extra cheese");

    let (status, _, _) = send(&app, json_req("PUT", "/pizza/1", payload)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, _, second) = send(&app, get_req("/pizza/1")).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn update_of_absent_id_is_not_found() {
    let app = app();
    let (status, _, body) = send(
        &app,
        json_req(
            "PUT",
            "/pizza/99",
            json!({"Name": "Ghost", "Description": "Nothing here"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let err: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(err["error"]["code"], "not_found");
}

#[tokio::test]
async fn delete_succeeds_once_then_is_not_found() {
    let app = app();
    send(
        &app,
        json_req(
            "POST",
            "/pizza",
            json!({"Name": "Margherita", "Description": "Classic"}),
        ),
    )
    .await;

    let (status, _, _) = send(&app, delete_req("/pizza/1")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, body) = send(&app, get_req("/pizza/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"null".to_vec());

    let (status, _, body) = send(&app, delete_req("/pizza/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let err: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(err["error"]["code"], "not_found");
}

#[tokio::test]
async fn list_reflects_current_store_contents() {
    let app = app();
    send(
        &app,
        json_req(
            "POST",
            "/pizza",
            json!({"Name": "Margherita", "Description": "Classic"}),
        ),
    )
    .await;
    send(
        &app,
        json_req(
            "POST",
            "/pizza",
            json!({"Name": "Diavola", "Description": "Hot salami"}),
        ),
    )
    .await;

    let (status, _, body) = send(&app, get_req("/pizzas")).await;
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<Pizza> = serde_json::from_slice(&body).unwrap();
    assert_eq!(listed.len(), 2);
    let margheritas = listed.iter().filter(|p| p.name == "Margherita").count();
    assert_eq!(margheritas, 1);

    send(&app, delete_req("/pizza/1")).await;
    let (_, _, body) = send(&app, get_req("/pizzas")).await;
    let listed: Vec<Pizza> = serde_json::from_slice(&body).unwrap();
    assert_eq!(listed.len(), 1);
    assert!(listed.iter().all(|p| p.name != "Margherita"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = app();
    let (status, _, body) = send(&app, get_req("/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    let doc: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(doc["info"]["title"], "PizzaStore API");
    assert!(doc["paths"]["/pizza/{id}"].is_object());
    assert!(doc["paths"]["/pizzas"].is_object());
}

#[tokio::test]
async fn health_and_readiness_respond_ok() {
    let app = app();
    let (status, _, body) = send(&app, get_req("/health")).await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "ok");

    let (status, _, _) = send(&app, get_req("/ready")).await;
    assert_eq!(status, StatusCode::OK);
}
