//! Unicom Tic data tier: schema initialization, the generic parameterized
//! query executor, record use cases, and the command dispatch boundary a
//! desktop shell drives.

pub mod app;
pub mod commands;
pub mod error;
pub mod infra;

pub use error::AppError;
pub use infra::{Database, Row, SqlParams, SqlValue, DB_FILE};
