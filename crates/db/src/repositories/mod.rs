//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept the request's `&mut PgConnection` as the first argument, so
//! every query of one request runs on the same pooled connection.

pub mod instruction_repo;
pub mod procedure_repo;
pub mod step_repo;

pub use instruction_repo::InstructionRepo;
pub use procedure_repo::ProcedureRepo;
pub use step_repo::StepRepo;
