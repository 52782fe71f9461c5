//! Vehicle rows: makes, car models, and which procedures apply to a model.
//!
//! No endpoint serves these yet; they mirror the schema so it can be
//! exercised from the database tests.

use mechai_core::types::DbId;
use sqlx::FromRow;

/// A row from the `makes` table.
#[derive(Debug, Clone, FromRow)]
pub struct Make {
    pub make_id: DbId,
    pub name: String,
}

/// A row from the `cars` table. One model year of a make.
#[derive(Debug, Clone, FromRow)]
pub struct Car {
    pub model_id: DbId,
    pub make_id: DbId,
    pub model_name: String,
    pub year: i32,
}

/// A row from the `car_procedures` link table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CarProcedure {
    pub model_id: DbId,
    pub procedure_id: DbId,
}
