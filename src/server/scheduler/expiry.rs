use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{error::Error, service::entitlement::EntitlementService};

/// Marks every active entitlement whose validity window has ended as expired
///
/// Credits and unlocked profile sets are left untouched.
///
/// # Returns
/// - `Ok(u64)` - Number of entitlements transitioned to expired
/// - `Err(Error)` - Database operation failed after retries
pub async fn sweep_lapsed_entitlements(db: DatabaseConnection) -> Result<u64, Error> {
    EntitlementService::new(&db)
        .expire_lapsed(Utc::now().naive_utc())
        .await
}
