//! Synthetic identifiers exposed by the public API.
//!
//! The procedures API never exposes bare primary keys. They are prefixed
//! with a short kind tag (`proc_42`, `step_7`, `instr_7`) and decoded back
//! on the way in. The prefixes are part of the external contract and must
//! not change.

use crate::error::CoreError;
use crate::types::DbId;

/// The namespaces a synthetic id can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Procedure,
    Step,
    /// A step referenced as an instruction. Shares the step's primary key.
    Instruction,
}

impl IdKind {
    /// The tag placed before the underscore.
    pub fn prefix(self) -> &'static str {
        match self {
            IdKind::Procedure => "proc",
            IdKind::Step => "step",
            IdKind::Instruction => "instr",
        }
    }

    /// Entity name used in not-found messages.
    pub fn entity(self) -> &'static str {
        match self {
            IdKind::Procedure => "Procedure",
            IdKind::Step => "Step",
            IdKind::Instruction => "Instruction",
        }
    }
}

/// Build the external id for a primary key.
///
/// ```
/// use mechai_core::synthetic_id::{encode, IdKind};
///
/// assert_eq!(encode(IdKind::Procedure, 42), "proc_42");
/// assert_eq!(encode(IdKind::Instruction, 3), "instr_3");
/// ```
pub fn encode(kind: IdKind, id: DbId) -> String {
    format!("{}_{id}", kind.prefix())
}

/// Recover the primary key from an external id.
///
/// A single leading `<prefix>_` is stripped if present; the remainder must
/// be a base-10 integer. Anything else is reported as
/// [`CoreError::NotFound`] for the kind's entity.
///
/// ```
/// use mechai_core::synthetic_id::{decode, IdKind};
///
/// assert_eq!(decode(IdKind::Step, "step_5").unwrap(), 5);
/// assert_eq!(decode(IdKind::Step, "5").unwrap(), 5);
/// assert!(decode(IdKind::Step, "proc_5").is_err());
/// ```
pub fn decode(kind: IdKind, raw: &str) -> Result<DbId, CoreError> {
    let remainder = raw
        .strip_prefix(kind.prefix())
        .and_then(|rest| rest.strip_prefix('_'))
        .unwrap_or(raw);

    remainder.parse::<DbId>().map_err(|_| CoreError::NotFound {
        entity: kind.entity(),
    })
}
