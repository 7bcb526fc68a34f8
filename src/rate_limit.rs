use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};
use tracing::warn;

/// Token bucket shared by every client.
///
/// Not keyed by IP (that needs `ConnectInfo`); the contact endpoint is
/// low-traffic, so one global bucket is enough to stop a flood.
#[derive(Debug)]
pub struct SimpleRateLimiter {
    // (last_update, tokens)
    state: Mutex<(Instant, f64)>,
    rate_per_sec: f64,
    burst_size: f64,
}

impl SimpleRateLimiter {
    pub fn new(rate_per_sec: f64, burst_size: f64) -> Self {
        Self {
            state: Mutex::new((Instant::now(), burst_size)),
            rate_per_sec,
            burst_size,
        }
    }

    /// Take one token if available.
    pub fn check(&self) -> bool {
        self.check_at(Instant::now())
    }

    fn check_at(&self, now: Instant) -> bool {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let (last_update, tokens) = *guard;
        let elapsed = now.saturating_duration_since(last_update).as_secs_f64();

        let available = (tokens + elapsed * self.rate_per_sec).min(self.burst_size);

        // Time passage is recorded even when the request is denied.
        if available >= 1.0 {
            *guard = (now, available - 1.0);
            true
        } else {
            *guard = (now, available);
            false
        }
    }

    /// How long until the next token is available.
    pub fn retry_after(&self) -> Duration {
        let guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let missing = (1.0 - guard.1).max(0.0);
        Duration::from_secs_f64(missing / self.rate_per_sec)
    }
}

/// Element inside the details step that receives the rate-limit notice.
pub const NOTICE_TARGET: &str = "#contact-notice";

const BUSY_NOTICE: &str = r#"<p class="text-sm text-red-300" role="alert">We're receiving a lot of inquiries right now. Please try again in a minute, or call us directly.</p>"#;

/// Rejects with 429 once the contact bucket is empty.
///
/// htmx requests are retargeted at the notice slot so the form and what the
/// visitor typed stay in place.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    if !state.rate_limiter.check() {
        let retry_after = state.rate_limiter.retry_after();
        warn!(
            name: "contact.rate_limited",
            retry_after_secs = retry_after.as_secs_f64(),
            "Contact submission rate limited"
        );
        return (
            StatusCode::TOO_MANY_REQUESTS,
            [
                (header::RETRY_AFTER, retry_after.as_secs().max(1).to_string()),
                (header::HeaderName::from_static("hx-retarget"), NOTICE_TARGET.to_string()),
                (header::HeaderName::from_static("hx-reswap"), "innerHTML".to_string()),
            ],
            Html(BUSY_NOTICE),
        )
            .into_response();
    }
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_rate_limiter() {
        let limiter = SimpleRateLimiter::new(2.0, 5.0); // 2 req/s, 5 burst
        let start = Instant::now();

        // Consume all burst
        for _ in 0..5 {
            assert!(limiter.check_at(start));
        }

        // Next should fail (immediate)
        assert!(!limiter.check_at(start));

        // 0.6s -> +1.2 tokens -> one request passes, 0.2 left
        let later = start + Duration::from_millis(600);
        assert!(limiter.check_at(later));
        assert!(!limiter.check_at(later));
    }

    #[test]
    fn test_bucket_never_exceeds_burst() {
        let limiter = SimpleRateLimiter::new(10.0, 2.0);
        let later = Instant::now() + Duration::from_secs(60);

        assert!(limiter.check_at(later));
        assert!(limiter.check_at(later));
        assert!(!limiter.check_at(later));
    }

    #[test]
    fn test_retry_after() {
        let limiter = SimpleRateLimiter::new(0.5, 1.0);
        assert_eq!(limiter.retry_after(), Duration::ZERO);

        let now = Instant::now();
        assert!(limiter.check_at(now));
        assert_eq!(limiter.retry_after(), Duration::from_secs(2));
    }
}
