//! Error types for the BizFlow system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BizflowError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    /// Version stamp mismatch on a guarded update.
    #[error("Conflicting update: {entity} with id {id} was modified concurrently")]
    Conflict { entity: String, id: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Authorization denied: {reason}")]
    AuthorizationDenied { reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type BizflowResult<T> = Result<T, BizflowError>;
