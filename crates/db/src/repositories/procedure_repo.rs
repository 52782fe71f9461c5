//! Repository for the `procedures` and `procedure_steps` tables.

use mechai_core::types::DbId;
use sqlx::PgConnection;

use crate::models::procedure::{Procedure, ProcedureStep};

/// Column list for `procedures` queries.
const COLUMNS: &str = "procedure_id, name, description";

/// Column list for `procedure_steps` queries.
const STEP_LINK_COLUMNS: &str = "procedure_id, step_id, order_num";

/// Provides data access for procedures and their step links.
pub struct ProcedureRepo;

impl ProcedureRepo {
    /// List all procedures.
    ///
    /// No `ORDER BY`: rows come back in whatever order the planner yields.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Procedure>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM procedures");
        sqlx::query_as::<_, Procedure>(&query)
            .fetch_all(conn)
            .await
    }

    /// Find a procedure by its primary key.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Procedure>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM procedures WHERE procedure_id = $1");
        sqlx::query_as::<_, Procedure>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List the step links of a procedure, ascending by `order_num`.
    ///
    /// Links sharing an `order_num` are left in storage order.
    pub async fn list_steps(
        conn: &mut PgConnection,
        procedure_id: DbId,
    ) -> Result<Vec<ProcedureStep>, sqlx::Error> {
        let query = format!(
            "SELECT {STEP_LINK_COLUMNS} FROM procedure_steps \
             WHERE procedure_id = $1 \
             ORDER BY order_num ASC"
        );
        sqlx::query_as::<_, ProcedureStep>(&query)
            .bind(procedure_id)
            .fetch_all(conn)
            .await
    }
}
