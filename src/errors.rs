//! Unified application error type.
//! All modules (store, workbook, git, db, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Journal (internal log)
    // ---------------------------
    #[error("Journal error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    #[error("Unknown activity code: {0}")]
    InvalidActivity(String),

    // ---------------------------
    // Entry errors
    // ---------------------------
    #[error("Description required for entry dated {0}")]
    EmptyDescription(String),

    // ---------------------------
    // Workbook errors
    // ---------------------------
    #[error("Template not recognized: {0}")]
    TemplateNotRecognized(String),

    #[error("Workbook error: {0}")]
    Workbook(String),

    // ---------------------------
    // Git import
    // ---------------------------
    #[error("Git error: {0}")]
    Git(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
