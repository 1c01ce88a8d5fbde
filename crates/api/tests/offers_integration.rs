//! Integration tests for offers and the dashboard summary.
//!
//! These tests require a running PostgreSQL instance; see common/mod.rs.

mod common;

use axum::http::{Method, StatusCode};
use common::*;
use serde_json::json;
use tower::ServiceExt;

async fn admin_app() -> (axum::Router, String, sqlx::PgPool) {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_test_data(&pool).await;
    create_user(&pool, "admin@example.com", "test-admin-password", "admin").await;

    let app = create_test_app(test_config(), pool.clone());
    let token = login(&app, "admin@example.com", "test-admin-password").await;
    (app, token, pool)
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn deactivated_offer_leaves_the_active_view() {
    let (app, token, _pool) = admin_app().await;

    let created = app
        .clone()
        .oneshot(authed_json_request(
            Method::POST,
            "/api/v1/admin/offers",
            &token,
            json!({
                "title": "Complete Digital Package",
                "subtitle": "Website + branding",
                "description": "Everything a small business needs to launch",
                "price": "Only KES 15,000",
                "isActive": true
            }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let offer = parse_response_body(created).await;
    let id = offer["id"].as_str().unwrap().to_string();
    assert_eq!(offer["badgeText"], "LIMITED OFFER");

    // Active while is_active = true
    let active = app
        .clone()
        .oneshot(json_request(Method::GET, "/api/v1/offers/active", json!(null)))
        .await
        .unwrap();
    let body = parse_response_body(active).await;
    assert_eq!(body["offers"].as_array().unwrap().len(), 1);

    // Toggle off via update
    let response = app
        .clone()
        .oneshot(authed_json_request(
            Method::PUT,
            &format!("/api/v1/admin/offers/{}", id),
            &token,
            json!({
                "title": "Complete Digital Package",
                "subtitle": "Website + branding",
                "description": "Everything a small business needs to launch",
                "price": "Only KES 15,000",
                "isActive": false
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Excluded from the active view, still present in the admin list
    let active = app
        .clone()
        .oneshot(json_request(Method::GET, "/api/v1/offers/active", json!(null)))
        .await
        .unwrap();
    let body = parse_response_body(active).await;
    assert!(body["offers"].as_array().unwrap().is_empty());

    let all = app
        .oneshot(authed_json_request(
            Method::GET,
            "/api/v1/admin/offers",
            &token,
            json!(null),
        ))
        .await
        .unwrap();
    let body = parse_response_body(all).await;
    assert_eq!(body["offers"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn dashboard_counts_track_content_and_page_views() {
    let (app, token, pool) = admin_app().await;

    app.clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/contact",
            json!({
                "name": "Jane Wanjiku",
                "email": "jane@example.com",
                "message": "I would like a quote for an online store"
            }),
        ))
        .await
        .unwrap();

    // Page views are recorded off the request task
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/page-views",
            json!({ "pagePath": "/portfolio", "userAgent": "integration-test" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    // Give the spawned insert a moment to land
    for _ in 0..50 {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM page_views")
            .fetch_one(&pool)
            .await
            .unwrap();
        if count > 0 {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }

    let response = app
        .oneshot(authed_json_request(
            Method::GET,
            "/api/v1/admin/dashboard",
            &token,
            json!(null),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["totalContacts"], 1);
    assert_eq!(body["newContacts"], 1);
    assert_eq!(body["totalPageViews"], 1);
}
