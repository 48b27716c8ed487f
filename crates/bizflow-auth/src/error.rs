//! Authentication error types.

use bizflow_core::error::BizflowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Fixed generic failure. Unknown email and wrong password are
    /// indistinguishable by design.
    #[error("invalid credentials")]
    InvalidCredentials,
}

impl From<AuthError> for BizflowError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => BizflowError::AuthenticationFailed {
                reason: err.to_string(),
            },
        }
    }
}
