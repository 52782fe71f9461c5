//! Repository for the `steps` table.

use mechai_core::types::DbId;
use sqlx::PgConnection;

use crate::models::step::Step;

/// Column list for `steps` queries.
const COLUMNS: &str = "step_id, title, body, yolo_class";

/// Provides data access for steps.
pub struct StepRepo;

impl StepRepo {
    /// Find a step by its primary key.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Step>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM steps WHERE step_id = $1");
        sqlx::query_as::<_, Step>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }
}
