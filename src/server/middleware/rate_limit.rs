//! Fixed-window request rate limiting.
//!
//! Each API router owns one `RateLimiter`. Requests are counted per client address and
//! request path. A window that has run its course is reset by the next request for the
//! same key, and the scheduled sweep drops windows nobody came back for.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tokio::sync::Mutex;

use crate::server::{
    config::Config,
    error::AppError,
    util::request::{client_address, original_path},
};

const LIMITED_MESSAGE: &str = "Too many requests, please try again later";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub window: Duration,
    pub max_requests: u32,
}

#[derive(Debug)]
struct Window {
    started_at: Instant,
    count: u32,
}

#[derive(Clone)]
pub struct RateLimiter {
    name: &'static str,
    policy: RateLimitPolicy,
    windows: Arc<Mutex<HashMap<String, Window>>>,
}

impl RateLimiter {
    pub fn new(name: &'static str, policy: RateLimitPolicy) -> Self {
        Self {
            name,
            policy,
            windows: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Counts one request for `key`.
    ///
    /// # Returns
    /// - `Ok(())` - Request is within the window's allowance
    /// - `Err(Duration)` - Allowance used up; time until the window resets
    pub async fn check(&self, key: &str) -> Result<(), Duration> {
        self.check_at(key, Instant::now()).await
    }

    async fn check_at(&self, key: &str, now: Instant) -> Result<(), Duration> {
        let mut windows = self.windows.lock().await;

        let window = windows.entry(key.to_string()).or_insert(Window {
            started_at: now,
            count: 0,
        });

        let elapsed = now.saturating_duration_since(window.started_at);
        if elapsed >= self.policy.window {
            window.started_at = now;
            window.count = 0;
        }

        if window.count >= self.policy.max_requests {
            let elapsed = now.saturating_duration_since(window.started_at);
            return Err(self.policy.window.saturating_sub(elapsed));
        }

        window.count += 1;
        Ok(())
    }

    /// Drops every window that has expired, returning how many were removed.
    pub async fn sweep(&self) -> usize {
        self.sweep_at(Instant::now()).await
    }

    async fn sweep_at(&self, now: Instant) -> usize {
        let mut windows = self.windows.lock().await;
        let before = windows.len();

        windows.retain(|_, w| now.saturating_duration_since(w.started_at) < self.policy.window);

        before - windows.len()
    }

    pub async fn tracked_keys(&self) -> usize {
        self.windows.lock().await.len()
    }
}

/// One limiter per API router.
#[derive(Clone)]
pub struct RateLimits {
    pub users: RateLimiter,
    pub documents: RateLimiter,
    pub analyses: RateLimiter,
    pub activities: RateLimiter,
}

impl RateLimits {
    /// Builds the limiters from configuration. Activities get twice the allowance of
    /// the other routers.
    pub fn from_config(config: &Config) -> Self {
        let policy = RateLimitPolicy {
            window: config.rate_limit_window,
            max_requests: config.rate_limit_max_requests,
        };
        let activity_policy = RateLimitPolicy {
            max_requests: policy.max_requests.saturating_mul(2),
            ..policy
        };

        Self {
            users: RateLimiter::new("users", policy),
            documents: RateLimiter::new("documents", policy),
            analyses: RateLimiter::new("analyses", policy),
            activities: RateLimiter::new("activities", activity_policy),
        }
    }

    pub fn all(&self) -> [&RateLimiter; 4] {
        [&self.users, &self.documents, &self.analyses, &self.activities]
    }
}

/// Rejects requests beyond the limiter's allowance with 429 and `Retry-After`.
pub async fn rate_limit(
    State(limiter): State<RateLimiter>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let key = format!("{}:{}", client_address(&request), original_path(&request));

    if let Err(retry_after) = limiter.check(&key).await {
        tracing::warn!(limiter = limiter.name(), key = %key, "Rate limit exceeded");

        return Err(AppError::TooManyRequests {
            message: LIMITED_MESSAGE.to_string(),
            retry_after_secs: retry_after_secs(retry_after),
        });
    }

    Ok(next.run(request).await)
}

/// Whole seconds until retry, rounded up and never zero.
fn retry_after_secs(retry_after: Duration) -> u64 {
    let secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
    secs.max(1)
}
