use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::Job;

use crate::server::{data::user::UserRepository, error::AppError};

/// Top of every hour.
const SCHEDULE: &str = "0 0 * * * *";

/// Hourly job removing registrations that never completed sign-up.
pub fn job(db: DatabaseConnection, ttl_hours: i64) -> Result<Job, AppError> {
    let job = Job::new_async(SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = purge_stale(&db, ttl_hours).await {
                tracing::error!("Error purging pending registrations: {}", e);
            }
        })
    })?;

    Ok(job)
}

/// Deletes pending rows whose OTP expired more than `ttl_hours` ago.
///
/// # Returns
/// - `Ok(u64)` - Number of rows removed
pub async fn purge_stale(db: &DatabaseConnection, ttl_hours: i64) -> Result<u64, AppError> {
    let cutoff = Utc::now() - Duration::hours(ttl_hours);
    let removed = UserRepository::new(db).delete_stale_pending(cutoff).await?;

    if removed > 0 {
        tracing::info!(removed, "Purged stale pending registrations");
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use test_utils::{builder::TestBuilder, factory::registration::RegistrationFactory};

    use super::*;

    /// Tests purging with one stale and one fresh pending registration.
    ///
    /// Expected: Ok(1) with the fresh row and the active account untouched
    #[tokio::test]
    async fn purges_only_stale_pending_rows() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let stale = RegistrationFactory::new(db)
            .pending()
            .otp(111111, Utc::now() - Duration::hours(30))
            .build()
            .await
            .unwrap();
        let fresh = RegistrationFactory::new(db).pending().build().await.unwrap();
        let active = RegistrationFactory::new(db)
            .otp(222222, Utc::now() - Duration::hours(30))
            .build()
            .await
            .unwrap();

        assert_eq!(purge_stale(db, 24).await.unwrap(), 1);

        let repo = UserRepository::new(db);
        assert!(repo.find_by_id(stale.user_id).await.unwrap().is_none());
        assert!(repo.find_by_id(fresh.user_id).await.unwrap().is_some());
        assert!(repo.find_by_id(active.user_id).await.unwrap().is_some());
    }
}
