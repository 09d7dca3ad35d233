//! Hosting API client
//!
//! Thin wrapper around `reqwest` that authenticates requests and classifies
//! responses into success, rate limiting, not found and failure.

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

const LOG_TARGET: &str = "    client";
const USER_AGENT: &str = "repo-pulse";
const REMAINING_HEADER: &str = "x-ratelimit-remaining";
const RESET_HEADER: &str = "x-ratelimit-reset";

/// Assumed wait when a refusal carries no reset header.
const FALLBACK_RESET: TimeDelta = TimeDelta::hours(1);

/// Request budget reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub remaining: usize,
    pub resets_at: DateTime<Utc>,
}

/// How a single API request turned out.
#[derive(Debug)]
pub enum ApiOutcome<T> {
    Ok(T),

    /// The API refused the request until the reset time
    RateLimited(RateLimit),

    NotFound,

    /// Transport error, undecodable body, or an unexpected status
    Failed(ohno::AppError),
}

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    now: DateTime<Utc>,
}

impl Client {
    /// Build a client, sending `Authorization: token <token>` when a token is given.
    ///
    /// `now` anchors the assumed reset time of a refusal without rate limit headers.
    pub fn new(token: Option<&str>, base_url: impl Into<String>, now: DateTime<Utc>) -> crate::Result<Self> {
        let mut default_headers = HeaderMap::new();
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("token {token}"))?;
            value.set_sensitive(true);
            let _ = default_headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers)
            .build()?;

        let mut base_url: String = base_url.into();
        while base_url.ends_with('/') {
            let _ = base_url.pop();
        }

        Ok(Self { http, base_url, now })
    }

    /// Base URL without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET request and classify the response by status
    pub async fn get(&self, url: &str) -> ApiOutcome<reqwest::Response> {
        log::debug!(target: LOG_TARGET, "GET {url}");

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => return ApiOutcome::Failed(e.into()),
        };

        let rate_limit = rate_limit_from_headers(response.headers());
        if let Some(RateLimit { remaining, resets_at }) = rate_limit {
            log::debug!(target: LOG_TARGET, "{remaining} requests left until {resets_at}");
        }

        match response.status() {
            status if status.is_success() => ApiOutcome::Ok(response),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => ApiOutcome::RateLimited(rate_limit.unwrap_or(RateLimit {
                remaining: 0,
                resets_at: self.now + FALLBACK_RESET,
            })),
            StatusCode::NOT_FOUND => ApiOutcome::NotFound,
            status => ApiOutcome::Failed(ohno::app_err!("unexpected HTTP status {status} from {url}")),
        }
    }

    /// Issue a GET request and decode a successful JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiOutcome<T> {
        match self.get(url).await {
            ApiOutcome::Ok(response) => match response.json().await {
                Ok(value) => ApiOutcome::Ok(value),
                Err(e) => ApiOutcome::Failed(e.into()),
            },
            ApiOutcome::RateLimited(rate_limit) => ApiOutcome::RateLimited(rate_limit),
            ApiOutcome::NotFound => ApiOutcome::NotFound,
            ApiOutcome::Failed(e) => ApiOutcome::Failed(e),
        }
    }
}

/// Read the remaining budget and reset time, if both headers are present and well formed
#[must_use]
pub fn rate_limit_from_headers(headers: &HeaderMap) -> Option<RateLimit> {
    let header = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());

    let remaining = header(REMAINING_HEADER)?.parse().ok()?;
    let resets_at = DateTime::from_timestamp(header(RESET_HEADER)?.parse().ok()?, 0)?;

    Some(RateLimit { remaining, resets_at })
}
