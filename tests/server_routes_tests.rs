//! Integration tests for the inventory HTTP surface
//!
//! Drives the full router (handlers, service and in-memory registry) with
//! `tower::ServiceExt::oneshot`, checking status codes, bodies and the
//! capitalised JSON field names existing clients depend on.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use server_inventory::{build_router, AppState};
use tower::ServiceExt; // for `oneshot`

fn app() -> Router {
    build_router(AppState::in_memory())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn parse(body: &str) -> Value {
    serde_json::from_str(body).expect("Response should be JSON")
}

async fn create(app: &Router, host: &str) -> Value {
    let body = json!({"HostName": host, "IPAddress": "10.0.0.1", "Status": "up"}).to_string();
    let (status, body) = send(app, "POST", "/inputServerData", Some(&body)).await;
    assert_eq!(status, StatusCode::OK);
    parse(&body)
}

#[tokio::test]
async fn test_create_get_delete_lifecycle() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/inputServerData",
        Some(r#"{"HostName":"srv1","IPAddress":"10.0.0.1","Status":"up"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        parse(&body),
        json!({"ID": 1, "HostName": "srv1", "IPAddress": "10.0.0.1", "Status": "up"})
    );

    let (status, fetched) = send(&app, "GET", "/getServerByID/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&fetched), parse(&body));

    let (status, deleted) = send(&app, "DELETE", "/deleteServerByID/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        parse(&deleted),
        json!({"message": "Server deleted successfully"})
    );

    let (status, body) = send(&app, "GET", "/getServerByID/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Server not found");
}

#[tokio::test]
async fn test_success_responses_are_json() {
    let app = app();

    let request = Request::builder()
        .method("GET")
        .uri("/getAllServerData")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");
}

#[tokio::test]
async fn test_list_empty_registry_is_empty_array() {
    let app = app();

    let (status, body) = send(&app, "GET", "/getAllServerData", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body), json!([]));
}

#[tokio::test]
async fn test_list_returns_servers_in_creation_order() {
    let app = app();
    for host in ["alpha", "bravo", "charlie"] {
        create(&app, host).await;
    }

    let (status, body) = send(&app, "GET", "/getAllServerData", None).await;
    assert_eq!(status, StatusCode::OK);

    let listed = parse(&body);
    let listed = listed.as_array().expect("Expected a JSON array");
    assert_eq!(listed.len(), 3);
    for (i, host) in ["alpha", "bravo", "charlie"].iter().enumerate() {
        assert_eq!(listed[i]["ID"], json!(i as i64 + 1));
        assert_eq!(listed[i]["HostName"], json!(host));
    }
}

#[tokio::test]
async fn test_create_ignores_client_id_and_never_reuses_ids() {
    let app = app();

    let (_, body) = send(
        &app,
        "POST",
        "/inputServerData",
        Some(r#"{"ID":500,"HostName":"a","IPAddress":"10.0.0.1","Status":"up"}"#),
    )
    .await;
    assert_eq!(parse(&body)["ID"], json!(1));

    create(&app, "b").await;
    let (status, _) = send(&app, "DELETE", "/deleteServerByID/2", None).await;
    assert_eq!(status, StatusCode::OK);

    let c = create(&app, "c").await;
    assert_eq!(c["ID"], json!(3));
}

#[tokio::test]
async fn test_create_with_malformed_json_is_bad_request() {
    let app = app();

    let (status, body) = send(&app, "POST", "/inputServerData", Some("{\"HostName\":")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid JSON format");

    // The rejected request must not consume an id
    let created = create(&app, "a").await;
    assert_eq!(created["ID"], json!(1));
}

#[tokio::test]
async fn test_create_with_empty_body_is_bad_request() {
    let app = app();

    let (status, _) = send(&app, "POST", "/inputServerData", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_with_partial_fields() {
    let app = app();

    let (status, body) = send(&app, "POST", "/inputServerData", Some(r#"{"HostName":"h"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        parse(&body),
        json!({"ID": 1, "HostName": "h", "IPAddress": "", "Status": ""})
    );
}

#[tokio::test]
async fn test_update_replaces_fields_and_keeps_id() {
    let app = app();
    create(&app, "old").await;

    let (status, body) = send(
        &app,
        "PUT",
        "/updateServerByID/1",
        Some(r#"{"ID":9,"HostName":"new","IPAddress":"10.0.0.2","Status":"down"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        parse(&body),
        json!({"ID": 1, "HostName": "new", "IPAddress": "10.0.0.2", "Status": "down"})
    );

    let (_, fetched) = send(&app, "GET", "/getServerByID/1", None).await;
    assert_eq!(parse(&fetched), parse(&body));
}

#[tokio::test]
async fn test_update_missing_server_is_not_found_and_creates_nothing() {
    let app = app();
    create(&app, "a").await;

    let (status, body) = send(
        &app,
        "PUT",
        "/updateServerByID/2",
        Some(r#"{"HostName":"ghost","IPAddress":"10.0.0.9","Status":"up"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Server not found");

    let (_, listed) = send(&app, "GET", "/getAllServerData", None).await;
    assert_eq!(parse(&listed).as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_with_malformed_json() {
    let app = app();
    create(&app, "a").await;

    let (status, body) = send(&app, "PUT", "/updateServerByID/1", Some("not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid JSON format");

    let (_, fetched) = send(&app, "GET", "/getServerByID/1", None).await;
    assert_eq!(parse(&fetched)["HostName"], json!("a"));

    let (status, _) = send(&app, "PUT", "/updateServerByID/5", Some("not json")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_server_is_not_found() {
    let app = app();

    let (status, body) = send(&app, "DELETE", "/deleteServerByID/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Server not found");
}

#[tokio::test]
async fn test_non_integer_ids_are_bad_requests() {
    let app = app();

    for (method, uri) in [
        ("GET", "/getServerByID/abc"),
        ("GET", "/getServerByID/"),
        ("PUT", "/updateServerByID/1.5"),
        ("PUT", "/updateServerByID/"),
        ("DELETE", "/deleteServerByID/x1"),
        ("DELETE", "/deleteServerByID/"),
        ("GET", "/getServerByID/1/x"),
        ("PUT", "/updateServerByID/1/x"),
        ("DELETE", "/deleteServerByID/1/"),
        ("GET", "/getServerByID/%FF"),
    ] {
        let (status, body) = send(&app, method, uri, Some("{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(body, "Invalid server ID", "{method} {uri}");
    }
}

#[tokio::test]
async fn test_wrong_method_is_method_not_allowed() {
    let app = app();

    for (method, uri) in [
        ("GET", "/inputServerData"),
        ("POST", "/getAllServerData"),
        ("DELETE", "/getServerByID/1"),
        ("POST", "/updateServerByID/1"),
        ("GET", "/deleteServerByID/1"),
        ("PUT", "/getServerByID/"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        assert_eq!(body, "Invalid request method", "{method} {uri}");
    }

    // HEAD must not fall through to the GET handlers
    for uri in ["/getAllServerData", "/getServerByID/1", "/getServerByID/"] {
        let (status, _) = send(&app, "HEAD", uri, None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "HEAD {uri}");
    }
}

#[tokio::test]
async fn test_create_accepts_bodies_over_two_megabytes() {
    let app = app();
    let host = "h".repeat(3 * 1024 * 1024);
    let body = json!({"HostName": host, "IPAddress": "10.0.0.1", "Status": "up"}).to_string();

    let (status, body) = send(&app, "POST", "/inputServerData", Some(&body)).await;
    assert_eq!(status, StatusCode::OK);

    let created = parse(&body);
    assert_eq!(created["ID"], json!(1));
    assert_eq!(created["HostName"].as_str().unwrap().len(), 3 * 1024 * 1024);
}

#[tokio::test]
async fn test_independent_states_do_not_share_records() {
    let first = app();
    let second = app();

    create(&first, "a").await;

    let (_, listed) = send(&second, "GET", "/getAllServerData", None).await;
    assert_eq!(parse(&listed), json!([]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_over_http() {
    let app = app();

    let handles: Vec<_> = (0..100)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move { create(&app, &format!("srv{i}")).await })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        let created = handle.await.unwrap();
        ids.push(created["ID"].as_i64().unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=100).collect::<Vec<i64>>());

    let (_, listed) = send(&app, "GET", "/getAllServerData", None).await;
    assert_eq!(parse(&listed).as_array().unwrap().len(), 100);
}
