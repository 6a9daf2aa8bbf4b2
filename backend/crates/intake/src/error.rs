//! Intake Error Types
//!
//! This module provides intake-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use thiserror::Error;

/// Intake-specific result type alias
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Intake-specific error variants
///
/// These map to appropriate HTTP status codes through `AppError`, which
/// renders the problem-details response body.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// A required field was present but blank
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntakeError {
    /// The offending field, for validation errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            IntakeError::BlankField { field } => Some(field),
            IntakeError::Database(_) => None,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            IntakeError::Database(e) => {
                tracing::error!(error = %e, "Intake database error");
            }
            IntakeError::BlankField { field } => {
                tracing::debug!(field = field, "Intake validation failed");
            }
        }
    }
}

impl From<IntakeError> for AppError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::BlankField { field } => {
                AppError::unprocessable(format!("{field} must not be blank"))
                    .with_action("Fill in every required field")
            }
            // Reuse the kernel's sqlx status mapping
            IntakeError::Database(e) => AppError::from(e),
        }
    }
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
