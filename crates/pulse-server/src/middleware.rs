use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// The user a request is acting as, resolved from its bearer token.
///
/// Every protected handler reads exactly one user's records, so the user id
/// rides along as a request extension the same way the request id does.
#[derive(Debug, Clone, Copy)]
pub struct AuthedUser(pub Uuid);

/// Bearer-token auth settings used by middleware.
///
/// Each token maps to the user whose data it grants access to.
#[derive(Debug, Clone)]
pub struct AuthState {
    tokens: Arc<HashMap<String, Uuid>>,
    dev_user: Uuid,
    pub enabled: bool,
}

impl AuthState {
    /// Builds auth config from `PULSE_API_TOKENS` (comma-separated
    /// `token:user-uuid` pairs).
    ///
    /// In development, empty/missing tokens disable auth for local iteration
    /// and every request acts as the dev user (`PULSE_DEV_USER_ID`, default
    /// the seeded demo user). In non-development envs, empty/missing tokens
    /// fail startup.
    pub fn from_env(is_development: bool) -> anyhow::Result<Self> {
        let raw = std::env::var("PULSE_API_TOKENS").unwrap_or_default();
        let mut tokens = HashMap::new();

        for pair in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let Some((token, user)) = pair.split_once(':') else {
                anyhow::bail!(
                    "PULSE_API_TOKENS entries must be token:user-uuid pairs, got {pair:?}"
                );
            };
            let user_id = user
                .trim()
                .parse::<Uuid>()
                .map_err(|e| anyhow::anyhow!("invalid user id in PULSE_API_TOKENS: {e}"))?;
            tokens.insert(token.trim().to_owned(), user_id);
        }

        let dev_user = match std::env::var("PULSE_DEV_USER_ID") {
            Ok(raw) => raw
                .parse::<Uuid>()
                .map_err(|e| anyhow::anyhow!("invalid PULSE_DEV_USER_ID: {e}"))?,
            Err(_) => pulse_db::DEMO_USER_ID,
        };

        if tokens.is_empty() {
            if is_development {
                tracing::warn!(
                    user_id = %dev_user,
                    "PULSE_API_TOKENS not set; bearer auth disabled in development environment"
                );
                return Ok(Self {
                    tokens: Arc::new(HashMap::new()),
                    dev_user,
                    enabled: false,
                });
            }

            anyhow::bail!(
                "PULSE_API_TOKENS is required outside development; provide comma-separated token:user-uuid pairs"
            );
        }

        Ok(Self {
            tokens: Arc::new(tokens),
            dev_user,
            enabled: true,
        })
    }

    /// Auth enabled with an explicit token map. Used by tests.
    #[must_use]
    pub fn from_tokens(tokens: HashMap<String, Uuid>) -> Self {
        Self {
            tokens: Arc::new(tokens),
            dev_user: pulse_db::DEMO_USER_ID,
            enabled: true,
        }
    }

    /// Auth disabled; every request acts as `dev_user`. Used by tests.
    #[must_use]
    pub fn disabled(dev_user: Uuid) -> Self {
        Self {
            tokens: Arc::new(HashMap::new()),
            dev_user,
            enabled: false,
        }
    }

    fn resolve(&self, token: &str) -> Option<Uuid> {
        self.tokens.get(token).copied()
    }
}

#[derive(Debug, Clone)]
struct RateLimitWindow {
    started_at: Instant,
    count: usize,
}

/// Sliding fixed-window limiter for simple API protection.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    max_requests: usize,
    window: Duration,
    state: Arc<Mutex<RateLimitWindow>>,
}

impl RateLimitState {
    #[must_use]
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            state: Arc::new(Mutex::new(RateLimitWindow {
                started_at: Instant::now(),
                count: 0,
            })),
        }
    }
}

#[derive(Debug, Serialize)]
struct MiddlewareErrorBody {
    error: MiddlewareError,
}

#[derive(Debug, Serialize)]
struct MiddlewareError {
    code: &'static str,
    message: &'static str,
}

/// Axum middleware that extracts or generates a request ID.
///
/// If the incoming request has an `x-request-id` header, that value is used.
/// Otherwise a new `UUIDv4` is generated. The ID is:
/// - Inserted into request extensions as [`RequestId`]
/// - Set on the response as the `x-request-id` header
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert("x-request-id", val);
    }

    res
}

/// Middleware resolving the bearer token to a user when auth is enabled.
///
/// On success the owning user id is inserted as an [`AuthedUser`] extension;
/// with auth disabled the configured dev user is assumed instead.
pub async fn require_bearer_auth(
    State(auth): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Response {
    if !auth.enabled {
        req.extensions_mut().insert(AuthedUser(auth.dev_user));
        return next.run(req).await;
    }

    let user = extract_bearer_token(req.headers().get(AUTHORIZATION))
        .and_then(|token| auth.resolve(token));

    match user {
        Some(user_id) => {
            req.extensions_mut().insert(AuthedUser(user_id));
            next.run(req).await
        }
        None => (
            StatusCode::UNAUTHORIZED,
            Json(MiddlewareErrorBody {
                error: MiddlewareError {
                    code: "unauthorized",
                    message: "missing or invalid bearer token",
                },
            }),
        )
            .into_response(),
    }
}

/// Middleware enforcing a fixed request-per-window limit.
pub async fn enforce_rate_limit(
    State(rate_limit): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    let mut window = rate_limit.state.lock().await;
    let elapsed = window.started_at.elapsed();

    if elapsed >= rate_limit.window {
        window.started_at = Instant::now();
        window.count = 0;
    }

    if window.count >= rate_limit.max_requests {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(MiddlewareErrorBody {
                error: MiddlewareError {
                    code: "rate_limited",
                    message: "rate limit exceeded",
                },
            }),
        )
            .into_response();
    }

    window.count += 1;
    drop(window);

    next.run(req).await
}

fn extract_bearer_token(value: Option<&HeaderValue>) -> Option<&str> {
    value
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_bearer_token_accepts_valid_header() {
        let header = HeaderValue::from_static("Bearer test-token");
        assert_eq!(extract_bearer_token(Some(&header)), Some("test-token"));
    }

    #[test]
    fn extract_bearer_token_rejects_non_bearer_header() {
        let header = HeaderValue::from_static("Basic abc123");
        assert_eq!(extract_bearer_token(Some(&header)), None);
    }

    #[test]
    fn extract_bearer_token_rejects_empty_token() {
        let header = HeaderValue::from_static("Bearer   ");
        assert_eq!(extract_bearer_token(Some(&header)), None);
    }

    #[test]
    fn from_tokens_resolves_the_owning_user() {
        let user = Uuid::new_v4();
        let mut map = HashMap::new();
        map.insert("secret".to_string(), user);
        let auth = AuthState::from_tokens(map);
        assert!(auth.enabled);
        assert_eq!(auth.resolve("secret"), Some(user));
        assert_eq!(auth.resolve("wrong"), None);
    }

    #[test]
    fn disabled_auth_carries_the_dev_user() {
        let user = Uuid::new_v4();
        let auth = AuthState::disabled(user);
        assert!(!auth.enabled);
        assert_eq!(auth.dev_user, user);
    }
}
