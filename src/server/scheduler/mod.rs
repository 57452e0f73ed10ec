//! Cron jobs that run alongside the HTTP server.

pub mod pending_registrations;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::JobScheduler;

use crate::server::error::AppError;

/// Registers every job and starts the scheduler.
///
/// The returned scheduler must be kept alive for as long as jobs should run.
pub async fn start_scheduler(
    db: DatabaseConnection,
    pending_registration_ttl_hours: i64,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    scheduler
        .add(pending_registrations::job(db, pending_registration_ttl_hours)?)
        .await?;
    scheduler.start().await?;

    tracing::info!("Scheduler started");

    Ok(scheduler)
}
