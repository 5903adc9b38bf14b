//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
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

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Store error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Schema error: {0}")]
    Schema(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid risk type: {0}")]
    InvalidRiskType(String),

    #[error("Invalid risk level: {0} (expected 0-100)")]
    InvalidRiskLevel(u32),

    // ---------------------------
    // Lookup / user-input errors
    // ---------------------------
    #[error("Unknown driver: {0}")]
    UnknownDriver(String),

    #[error("Unknown alert: {0}")]
    UnknownAlert(String),

    #[error("Unknown notification: {0}")]
    UnknownNotification(String),

    #[error("No drivers selected")]
    EmptySelection,

    #[error("Clock error: {0}")]
    Clock(String),

    #[error("Refresh error: {0}")]
    Refresh(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
