//! Error types for envsure operations.
//!
//! This module defines [`EnvsureError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `EnvsureError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `EnvsureError::Other`) for unexpected errors
//! - Every error is fatal: the pipeline aborts before any write happens, so
//!   the on-disk file is never left partially merged
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envsure operations.
#[derive(Debug, Error)]
pub enum EnvsureError {
    /// The .env file does not exist at the expected location.
    #[error("No .env file found at {path}. Please create a .env file in the project root.")]
    ConfigNotFound { path: PathBuf },

    /// Reading the .env file failed for a reason other than absence.
    #[error("Failed to read {path}: {source}")]
    ConfigReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The required-key list is empty, so a run would be a no-op.
    #[error("No required environment keys configured. Add keys to REQUIRED_KEYS (or set ENVSURE_REQUIRED_KEYS) before running.")]
    NoRequirementsConfigured,

    /// Writing the merged .env file back failed.
    #[error("Failed to write {path}: {source}")]
    ConfigWriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A required key needs a value but no answer source is available
    /// (non-interactive run with no override for the key).
    #[error("Missing value for '{key}' and no answer available. Set ENVSURE_ANSWER_{key} or run in a terminal.")]
    AnswerUnavailable { key: String },

    /// IO error wrapper (terminal prompt failures land here).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envsure operations.
pub type Result<T> = std::result::Result<T, EnvsureError>;
