//! Rate limiting middleware for the public contact endpoint.
//!
//! Keyed per client address using a token-bucket limiter. The contact form
//! is the only unauthenticated write surface apart from page views, so it
//! gets its own budget.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter as GovRateLimiter,
};
use std::{
    collections::HashMap,
    num::NonZeroU32,
    sync::{Arc, RwLock},
};

use crate::app::AppState;
use crate::error::ApiError;

type ClientRateLimiter = GovRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Rate limiter state shared across all requests, keyed by client address.
pub struct RateLimiterState {
    limiters: RwLock<HashMap<String, Arc<ClientRateLimiter>>>,
    limit_per_minute: u32,
}

impl RateLimiterState {
    /// Create a new rate limiter state with the specified limit per minute.
    pub fn new(limit_per_minute: u32) -> Self {
        Self {
            limiters: RwLock::new(HashMap::new()),
            limit_per_minute,
        }
    }

    fn get_or_create_limiter(&self, client: &str) -> Arc<ClientRateLimiter> {
        {
            let limiters = self.limiters.read().unwrap();
            if let Some(limiter) = limiters.get(client) {
                return limiter.clone();
            }
        }

        let mut limiters = self.limiters.write().unwrap();

        if let Some(limiter) = limiters.get(client) {
            return limiter.clone();
        }

        let quota = Quota::per_minute(
            NonZeroU32::new(self.limit_per_minute).unwrap_or(NonZeroU32::new(30).unwrap()),
        );
        let limiter = Arc::new(GovRateLimiter::direct(quota));
        limiters.insert(client.to_string(), limiter.clone());
        limiter
    }

    /// Check whether a request from the given client should be allowed.
    /// Returns Err with retry-after seconds when over budget.
    pub fn check(&self, client: &str) -> Result<(), u64> {
        let limiter = self.get_or_create_limiter(client);

        match limiter.check() {
            Ok(_) => Ok(()),
            Err(not_until) => {
                let wait_time = not_until.wait_time_from(governor::clock::Clock::now(
                    &governor::clock::DefaultClock::default(),
                ));
                Err(wait_time.as_secs().max(1))
            }
        }
    }
}

impl std::fmt::Debug for RateLimiterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiterState")
            .field("limit_per_minute", &self.limit_per_minute)
            .field("active_limiters", &self.limiters.read().unwrap().len())
            .finish()
    }
}

/// Best-effort client key: the first X-Forwarded-For hop when present
/// (the service is expected to sit behind a proxy), otherwise a shared
/// bucket.
fn client_key(req: &Request<Body>) -> String {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Middleware that applies per-client rate limiting.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let Some(limiter) = state.rate_limiter.as_ref() else {
        return next.run(req).await;
    };

    let client = client_key(&req);

    match limiter.check(&client) {
        Ok(()) => next.run(req).await,
        Err(retry_after) => {
            tracing::debug!(client = %client, "Rate limited contact submission");
            let mut response = ApiError::RateLimited.into_response();
            if let Ok(value) = HeaderValue::from_str(&retry_after.to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
            response
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_within_budget() {
        let state = RateLimiterState::new(5);
        for _ in 0..5 {
            assert!(state.check("198.51.100.7").is_ok());
        }
    }

    #[test]
    fn test_rejects_over_budget() {
        let state = RateLimiterState::new(2);
        assert!(state.check("198.51.100.8").is_ok());
        assert!(state.check("198.51.100.8").is_ok());
        let retry_after = state.check("198.51.100.8").unwrap_err();
        assert!(retry_after >= 1);
    }

    #[test]
    fn test_clients_have_separate_budgets() {
        let state = RateLimiterState::new(1);
        assert!(state.check("client-a").is_ok());
        assert!(state.check("client-b").is_ok());
        assert!(state.check("client-a").is_err());
    }

    #[test]
    fn test_client_key_from_forwarded_header() {
        let req = Request::builder()
            .header("x-forwarded-for", "203.0.113.9, 10.0.0.1")
            .body(Body::empty())
            .unwrap();
        assert_eq!(client_key(&req), "203.0.113.9");
    }

    #[test]
    fn test_client_key_fallback() {
        let req = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(client_key(&req), "unknown");
    }
}
