//! Procedure models and response shapes.
//!
//! A procedure is a named repair job; its steps are attached through the
//! `procedure_steps` link table with an explicit position.

use mechai_core::synthetic_id::{encode, IdKind};
use mechai_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `procedures` table.
#[derive(Debug, Clone, FromRow)]
pub struct Procedure {
    pub procedure_id: DbId,
    pub name: String,
    pub description: Option<String>,
}

/// A row from the `procedure_steps` link table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ProcedureStep {
    pub procedure_id: DbId,
    pub step_id: DbId,
    pub order_num: i32,
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// One entry of `GET /api/procedures`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcedureListResponse {
    pub id: String,
    pub title: String,
    /// Never null; a missing description is sent as `""`.
    pub description: String,
}

/// A step reference inside a procedure detail.
///
/// `id` and `instruction_id` carry the same step key under the `step` and
/// `instr` namespaces respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepInProcedureResponse {
    pub id: String,
    pub instruction_id: String,
    pub order: i32,
}

/// Body of `GET /api/procedures/{procedure_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcedureDetailResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub steps: Vec<StepInProcedureResponse>,
}

impl From<Procedure> for ProcedureListResponse {
    fn from(p: Procedure) -> Self {
        Self {
            id: encode(IdKind::Procedure, p.procedure_id),
            title: p.name,
            description: p.description.unwrap_or_default(),
        }
    }
}

impl From<&ProcedureStep> for StepInProcedureResponse {
    fn from(link: &ProcedureStep) -> Self {
        Self {
            id: encode(IdKind::Step, link.step_id),
            instruction_id: encode(IdKind::Instruction, link.step_id),
            order: link.order_num,
        }
    }
}

impl ProcedureDetailResponse {
    /// Combine a procedure with its step links.
    ///
    /// `links` is expected in `order_num` order already; it is re-sorted
    /// with a stable sort so equal positions keep the order they came in.
    pub fn assemble(procedure: Procedure, links: &[ProcedureStep]) -> Self {
        let mut ordered: Vec<&ProcedureStep> = links.iter().collect();
        ordered.sort_by_key(|link| link.order_num);

        let ProcedureListResponse {
            id,
            title,
            description,
        } = procedure.into();

        Self {
            id,
            title,
            description,
            steps: ordered.into_iter().map(StepInProcedureResponse::from).collect(),
        }
    }
}
