//! Repository for the legacy `instructions` table.

use sqlx::PgConnection;

use crate::models::instruction::Instruction;

/// Column list for `instructions` queries.
const COLUMNS: &str = "id, step_num, instruction_text";

/// Provides data access for legacy instructions.
pub struct InstructionRepo;

impl InstructionRepo {
    /// List every instruction row, unfiltered and in storage order.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Instruction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM instructions");
        sqlx::query_as::<_, Instruction>(&query)
            .fetch_all(conn)
            .await
    }
}
