//! BizFlow Core — domain models, error taxonomy, repository trait
//! definitions, and the pure access-control resolver.

pub mod access;
pub mod error;
pub mod models;
pub mod repository;

pub use error::{BizflowError, BizflowResult};
