//! BizFlow Directory — entity lifecycle services.
//!
//! Every mutation flows through one of these services, which resolve the
//! acting user's capabilities before touching the store. The services
//! are generic over the `bizflow-core` repository traits, so they carry
//! no dependency on the storage crate.

pub mod attendance;
pub mod org_admin;
pub mod workforce;

pub use attendance::AttendanceService;
pub use org_admin::OrgAdminService;
pub use workforce::WorkforceService;

use bizflow_core::error::BizflowError;

pub(crate) fn denied(reason: &str) -> BizflowError {
    BizflowError::AuthorizationDenied {
        reason: reason.into(),
    }
}
