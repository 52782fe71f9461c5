pub mod instructions;
pub mod procedures;
pub mod steps;

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use mechai_core::error::CoreError;
use mechai_core::synthetic_id::{self, IdKind};
use mechai_core::types::DbId;

use crate::error::AppError;

/// Decode a synthetic id taken from the URL path.
///
/// A segment axum cannot extract (e.g. percent-encoded bytes that are not
/// UTF-8) is reported as not found, the same as an id that fails to decode.
pub(crate) fn decode_path_id(
    kind: IdKind,
    path: Result<Path<String>, PathRejection>,
) -> Result<DbId, AppError> {
    let Path(raw) = path.map_err(|rejection| {
        tracing::debug!(entity = kind.entity(), error = %rejection, "Unreadable path id");
        CoreError::NotFound {
            entity: kind.entity(),
        }
    })?;

    let id = synthetic_id::decode(kind, &raw).inspect_err(|_| {
        tracing::debug!(entity = kind.entity(), raw = %raw, "Undecodable id");
    })?;

    Ok(id)
}
