//! Error types for receipt submission and retrieval.

use crate::schema::ValidationError;

/// Caller-visible failures of the receipt service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("The receipt is invalid ({} problem(s))", .0.len())]
    InvalidReceipt(Vec<ValidationError>),

    #[error("No receipt found for id {0}")]
    NotFound(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
