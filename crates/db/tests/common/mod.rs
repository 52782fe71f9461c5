//! Fixture helpers shared by the database tests.

#![allow(dead_code)]

use sqlx::PgPool;

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
