//! BizFlow Metrics — aggregated productivity reports and the external
//! AI summary collaborator.
//!
//! Reports are pure functions recomputed from store snapshots on every
//! call. The store is small and in-memory, so there is no caching or
//! incremental maintenance.

pub mod report;
pub mod summary;

pub use report::{
    executive_report, platform_report, total_hours, ExecutiveReport, OrgBreakdown,
    PlatformReport, TeamStat, UserStat,
};
pub use summary::{HttpSummaryClient, SummaryConfig, SummaryGenerator, FALLBACK_SUMMARY};
