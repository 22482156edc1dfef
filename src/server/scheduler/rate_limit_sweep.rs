use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, middleware::rate_limit::RateLimits};

/// Starts the rate limit sweep scheduler
///
/// Runs every minute and drops expired windows from every limiter so the tracked key
/// set stays bounded by the clients that are still active.
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; call `shutdown` on it when stopping
/// - `Err(AppError::SchedulerErr)` - Scheduler could not be created or started
pub async fn start_scheduler(rate_limits: RateLimits) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let rate_limits = rate_limits.clone();

        Box::pin(async move {
            sweep_all(&rate_limits).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Rate limit sweep scheduler started");

    Ok(scheduler)
}

/// Sweeps every limiter, returning the total number of windows removed.
async fn sweep_all(rate_limits: &RateLimits) -> usize {
    let mut removed = 0;

    for limiter in rate_limits.all() {
        let count = limiter.sweep().await;
        if count > 0 {
            tracing::debug!(limiter = limiter.name(), removed = count, "Swept expired rate limit windows");
        }
        removed += count;
    }

    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::config::Config;

    /// Expected: live windows survive a sweep
    #[tokio::test]
    async fn sweep_keeps_active_windows() {
        let config = Config::from_lookup(|_| None).unwrap();
        let limits = RateLimits::from_config(&config);

        limits.users.check("10.0.0.1:/api/users").await.unwrap();
        limits.activities.check("10.0.0.1:/api/activities/recent").await.unwrap();

        assert_eq!(sweep_all(&limits).await, 0);
        assert_eq!(limits.users.tracked_keys().await, 1);
        assert_eq!(limits.activities.tracked_keys().await, 1);
    }

    /// Expected: windows of a one-second policy are gone after the window passes
    #[tokio::test]
    async fn sweep_drops_expired_windows() {
        let config = Config::from_lookup(|key| {
            (key == "RATE_LIMIT_WINDOW_SECS").then(|| "1".to_string())
        })
        .unwrap();
        let limits = RateLimits::from_config(&config);

        limits.documents.check("10.0.0.1:/api/documents").await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

        assert_eq!(sweep_all(&limits).await, 1);
        assert_eq!(limits.documents.tracked_keys().await, 0);
    }
}
