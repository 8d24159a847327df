use thiserror::Error;

use crate::domain::validation::{DomainError, ValidationError};

/// Application error types surfaced by the use cases
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {errors:?}")]
    Validation { errors: Vec<ValidationError> },

    #[error("{aggregate} with ID {id} was not found")]
    NotFound { aggregate: String, id: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl AppError {
    pub fn not_found(aggregate: impl Into<String>, id: impl Into<String>) -> Self {
        AppError::NotFound { aggregate: aggregate.into(), id: id.into() }
    }

    pub fn internal(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Internal { message: message.into(), source: Box::new(source) }
    }

    /// Get the error type for logging and metrics
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation",
            AppError::NotFound { .. } => "not_found",
            AppError::Storage { .. } => "storage",
            AppError::Internal { .. } => "internal",
        }
    }

    /// Check if this error should be logged as an error (vs warning)
    pub fn should_log_as_error(&self) -> bool {
        matches!(self, AppError::Storage { .. } | AppError::Internal { .. })
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let errors = if err.errors().is_empty() {
            vec![ValidationError::new(err.to_string())]
        } else {
            err.errors().to_vec()
        };
        AppError::Validation { errors }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage { message: err.to_string() }
    }
}
