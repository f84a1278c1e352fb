//! Stable error codes for the presentation layer.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Schema initialization failed. Fatal: callers abort startup.
    #[error("database init failed: {0}")]
    Init(String),

    /// Driver-level failure (constraint violation, malformed SQL, I/O).
    /// Propagated to the caller with no retry.
    #[error("{0}")]
    Db(String),

    /// The blocking database task could not be joined.
    #[error("task failed: {0}")]
    Task(String),

    /// A result could not be serialized at the command boundary.
    #[error("encode failed: {0}")]
    Encode(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Init(_) => "INIT_ERROR",
            Self::Db(_) => "DB_ERROR",
            Self::Task(_) => "TASK_ERROR",
            Self::Encode(_) => "ENCODE_ERROR",
        }
    }

    pub fn to_serde(&self) -> AppErrorDto {
        AppErrorDto {
            code: self.code().to_string(),
            message: self.to_string(),
            details: None,
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Db(e.to_string())
    }
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_serde().serialize(serializer)
    }
}

#[derive(Debug, Serialize)]
pub struct AppErrorDto {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
