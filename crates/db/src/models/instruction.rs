//! Legacy instruction rows.

use mechai_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `instructions` table.
///
/// Served as-is on the root listing, so the JSON keys keep their
/// historical capitalised names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Instruction {
    #[serde(rename = "ID")]
    pub id: DbId,
    #[serde(rename = "StepNum")]
    pub step_num: i32,
    #[serde(rename = "InstructionText")]
    pub instruction_text: String,
}
