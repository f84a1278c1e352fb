//! Infrastructure: SQLite schema and the generic query executor.

pub mod db;

pub use db::{Database, Row, SqlParams, SqlValue, DB_FILE};
