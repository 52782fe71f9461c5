#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use mechai_api::config::ServerConfig;
use mechai_api::router::build_app_router;
use mechai_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn insert_procedure(pool: &PgPool, name: &str, description: Option<&str>) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO procedures (name, description) VALUES ($1, $2) RETURNING procedure_id",
    )
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

pub async fn insert_step(pool: &PgPool, title: &str, body: &str, yolo_class: Option<&str>) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO steps (title, body, yolo_class) VALUES ($1, $2, $3) RETURNING step_id",
    )
    .bind(title)
    .bind(body)
    .bind(yolo_class)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

pub async fn link_step(pool: &PgPool, procedure_id: i64, step_id: i64, order_num: i32) {
    sqlx::query(
        "INSERT INTO procedure_steps (procedure_id, step_id, order_num) VALUES ($1, $2, $3)",
    )
    .bind(procedure_id)
    .bind(step_id)
    .bind(order_num)
    .execute(pool)
    .await
    .unwrap();
}
