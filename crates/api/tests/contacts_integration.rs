//! Integration tests for the contact form and submission management.
//!
//! These tests require a running PostgreSQL instance; see common/mod.rs.

mod common;

use axum::http::{Method, StatusCode};
use common::*;
use serde_json::json;
use tower::ServiceExt;

fn valid_form() -> serde_json::Value {
    json!({
        "name": "Jane Wanjiku",
        "email": "jane@example.com",
        "phone": "0111679286",
        "message": "I would like a quote for an online store"
    })
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn submit_contact_creates_new_submission() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_test_data(&pool).await;

    let app = create_test_app(test_config(), pool.clone());

    let response = app
        .oneshot(json_request(Method::POST, "/api/v1/contact", valid_form()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "new");
    assert_eq!(body["name"], "Jane Wanjiku");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn submit_contact_rejects_short_message_without_insert() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_test_data(&pool).await;

    let app = create_test_app(test_config(), pool.clone());

    let mut form = valid_form();
    form["message"] = json!("short");

    let response = app
        .oneshot(json_request(Method::POST, "/api/v1/contact", form))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["message"], "Message must be at least 10 characters");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn submit_contact_replays_idempotency_key() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_test_data(&pool).await;

    let app = create_test_app(test_config(), pool.clone());

    let request = |key: &str| {
        axum::http::Request::builder()
            .method(Method::POST)
            .uri("/api/v1/contact")
            .header("content-type", "application/json")
            .header("idempotency-key", key)
            .body(axum::body::Body::from(valid_form().to_string()))
            .unwrap()
    };

    let first = app.clone().oneshot(request("retry-1")).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);
    let first_body = parse_response_body(first).await;

    let second = app.clone().oneshot(request("retry-1")).await.unwrap();
    assert_eq!(second.status(), StatusCode::CREATED);
    let second_body = parse_response_body(second).await;

    assert_eq!(first_body["id"], second_body["id"]);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn mark_read_transitions_once_and_stays_read() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_test_data(&pool).await;
    create_user(&pool, "admin@example.com", "test-admin-password", "admin").await;

    let app = create_test_app(test_config(), pool.clone());
    let token = login(&app, "admin@example.com", "test-admin-password").await;

    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/v1/contact", valid_form()))
        .await
        .unwrap();
    let submission = parse_response_body(response).await;
    let id = submission["id"].as_str().unwrap().to_string();

    let uri = format!("/api/v1/admin/contacts/{}/read", id);

    let first = app
        .clone()
        .oneshot(authed_json_request(Method::POST, &uri, &token, json!({})))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(parse_response_body(first).await["status"], "read");

    // Second call is a no-op; status stays read
    let second = app
        .clone()
        .oneshot(authed_json_request(Method::POST, &uri, &token, json!({})))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(parse_response_body(second).await["status"], "read");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn admin_contacts_requires_authentication() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_test_data(&pool).await;

    let app = create_test_app(test_config(), pool.clone());

    let response = app
        .oneshot(json_request(Method::GET, "/api/v1/admin/contacts", json!(null)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn whatsapp_link_composes_without_persisting() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_test_data(&pool).await;

    let app = create_test_app(test_config(), pool.clone());

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/contact/whatsapp-link",
            json!({ "name": "Jane", "email": "jane@example.com", "message": "Hello" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with("https://wa.me/254111679286?text="));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
