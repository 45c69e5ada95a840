//! Scheduler for periodic entitlement maintenance.
//!
//! Runs a cron-based sweep that moves active entitlements past their validity window to the
//! expired state, so balances shown to users and administrators agree with the checks the
//! unlock path already performs.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::error::Error;

pub mod config;
pub mod expiry;

use self::{config::expiry as expiry_config, expiry::sweep_lapsed_entitlements};

/// Job scheduler for background entitlement maintenance.
pub struct Scheduler {
    db: DatabaseConnection,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(db: DatabaseConnection) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { db, sched })
    }

    /// Registers all scheduled jobs and starts the scheduler.
    ///
    /// The following jobs are registered:
    /// - Entitlement expiry sweep (hourly)
    ///
    /// # Returns
    /// - `Ok(())` - All jobs successfully registered and scheduler started
    /// - `Err(Error)` - Failed to register a job or start the scheduler
    pub async fn start(mut self) -> Result<(), Error> {
        self.schedule_job(
            expiry_config::CRON_EXPRESSION,
            "entitlement expiry",
            sweep_lapsed_entitlements,
        )
        .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// On execution, the job logs the number of records it touched (on success) or the error.
    ///
    /// # Arguments
    /// - `cron` - Cron expression defining when the job should run (e.g., "0 0 * * * *" for hourly)
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async job receiving a database connection, returning the count of records touched
    ///
    /// # Returns
    /// - `Ok(())` - Job successfully registered with the scheduler
    /// - `Err(Error)` - Failed to create or add the job (invalid cron expression or scheduler error)
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<u64, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(db).await {
                        Ok(count) => tracing::info!("Ran {} job, {} record(s) updated", name, count),
                        Err(e) => tracing::error!("Error running {} job: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
