//! Domain types and pure logic shared by the database and API crates.

pub mod error;
pub mod synthetic_id;
pub mod types;
