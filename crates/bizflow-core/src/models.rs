//! Domain models for BizFlow.
//!
//! These are the core types shared across all crates. Cross-references
//! between entities are by id lookup only — there is no foreign-key
//! enforcement and deletes never cascade.

pub mod attendance;
pub mod organization;
pub mod project;
pub mod task;
pub mod team;
pub mod user;
