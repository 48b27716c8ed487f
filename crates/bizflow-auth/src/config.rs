//! Authentication configuration.

/// Configuration for the credential service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Minimum length accepted when a rotation is finalized. Shorter
    /// secrets are rejected with a validation error.
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_password_length: 8,
        }
    }
}
