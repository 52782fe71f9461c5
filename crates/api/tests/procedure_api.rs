//! Integration tests for `/api/procedures`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, insert_procedure, insert_step, link_step};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_on_empty_table_returns_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/procedures").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_encodes_ids_and_coalesces_description(pool: PgPool) {
    let with_desc = insert_procedure(&pool, "Oil change", Some("Drain and refill")).await;
    let without_desc = insert_procedure(&pool, "Tyre rotation", None).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/procedures").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);

    let find = |id: i64| {
        items
            .iter()
            .find(|p| p["id"] == format!("proc_{id}"))
            .unwrap_or_else(|| panic!("proc_{id} missing from {json}"))
    };

    assert_eq!(
        find(with_desc),
        &json!({
            "id": format!("proc_{with_desc}"),
            "title": "Oil change",
            "description": "Drain and refill",
        })
    );
    assert_eq!(find(without_desc)["description"], "");
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_returns_steps_sorted_by_order(pool: PgPool) {
    let proc_id = insert_procedure(&pool, "Brake pads", None).await;
    let s2 = insert_step(&pool, "Remove caliper", "Undo bolts", None).await;
    let s1 = insert_step(&pool, "Lift car", "Use jack points", None).await;
    let s3 = insert_step(&pool, "Fit pads", "Push piston back", None).await;
    link_step(&pool, proc_id, s2, 2).await;
    link_step(&pool, proc_id, s1, 1).await;
    link_step(&pool, proc_id, s3, 3).await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/procedures/proc_{proc_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], format!("proc_{proc_id}"));
    assert_eq!(json["title"], "Brake pads");
    assert_eq!(json["description"], "");
    assert_eq!(
        json["steps"],
        json!([
            { "id": format!("step_{s1}"), "instruction_id": format!("instr_{s1}"), "order": 1 },
            { "id": format!("step_{s2}"), "instruction_id": format!("instr_{s2}"), "order": 2 },
            { "id": format!("step_{s3}"), "instruction_id": format!("instr_{s3}"), "order": 3 },
        ])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_accepts_bare_numeric_id(pool: PgPool) {
    let proc_id = insert_procedure(&pool, "Wipers", Some("Front only")).await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/procedures/{proc_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], format!("proc_{proc_id}"));
    assert_eq!(json["description"], "Front only");
    assert_eq!(json["steps"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_procedure_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/procedures/proc_999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "detail": "Procedure not found" })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unparseable_id_matches_missing_id_response(pool: PgPool) {
    for bad in ["abc", "proc_", "proc_x1", "step_1"] {
        let app = common::build_test_app(pool.clone());

        let response = get(app, &format!("/api/procedures/{bad}")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "id {bad}");
        assert_eq!(
            body_json(response).await,
            json!({ "detail": "Procedure not found" }),
            "id {bad}"
        );
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_utf8_id_matches_missing_id_response(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/procedures/%FF").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "detail": "Procedure not found" })
    );
}
