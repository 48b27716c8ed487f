//! BizFlow Auth — password authentication, the rotation gate, and
//! one-time credential issuance.
//!
//! Credentials are stored and compared in clear text so that an issued
//! one-time code is itself the login secret. This is a documented
//! security gap, not a pattern to copy: a production deployment must
//! hash credentials (e.g. Argon2id) and compare in constant time.

pub mod config;
pub mod error;
pub mod otp;
pub mod service;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::{AuthOutcome, CredentialService, IssuedCredential, Session};
