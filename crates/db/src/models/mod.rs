//! Row structs and API response shapes.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - The `Serialize` response shapes built from those rows, with their
//!   mapping conversions

pub mod instruction;
pub mod procedure;
pub mod step;
pub mod vehicle;
