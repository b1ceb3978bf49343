use std::time::Duration;

use reqwest::StatusCode;
use tokio::time::sleep;

use crate::{
    transport::{HttpTransport, Transport},
    FetchError, FetchOptions, RequestDescriptor, Result,
};

/// Hints above this are still honored but logged as suspicious.
pub const LONG_RETRY_AFTER: Duration = Duration::from_secs(15 * 60);

/// Normalized result of a fetch that did not fail.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    /// 2xx response; the body parsed as JSON, untouched.
    Success(serde_json::Value),
    /// 404 response. The resource does not exist upstream.
    NotFound,
}

/// Issues GET requests and absorbs upstream rate limiting.
///
/// Only 429 responses are retried. Each retry waits for the server's
/// `Retry-After` hint plus a safety margin, and the total number of requests
/// is bounded by [`FetchOptions::max_attempts`]. No state is kept between
/// calls to [`RateLimitedFetcher::fetch`].
#[derive(Clone, Debug)]
pub struct RateLimitedFetcher<T = HttpTransport> {
    transport: T,
    options: FetchOptions,
}

impl RateLimitedFetcher<HttpTransport> {
    /// Creates a fetcher over a fresh `reqwest` client with default options.
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }
}

impl Default for RateLimitedFetcher<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> RateLimitedFetcher<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            options: FetchOptions::default(),
        }
    }

    /// Applies timeout and retry options.
    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches `request`, retrying only while the upstream answers 429.
    ///
    /// # Errors
    ///
    /// - [`FetchError::RetryExhausted`] when every attempt was rate limited.
    /// - [`FetchError::Http`] for any other non-success status except 404.
    /// - [`FetchError::Transport`] when the round trip itself fails.
    /// - [`FetchError::Decode`] when a success body is not JSON.
    pub async fn fetch(&self, request: &RequestDescriptor) -> Result<FetchOutcome> {
        let timeout = Duration::from_millis(self.options.timeout_ms);
        let max_attempts = self.options.max_attempts.max(1);
        let mut attempts = 0usize;

        loop {
            let response = self.transport.get(request, timeout).await?;
            attempts += 1;

            match response.status {
                StatusCode::TOO_MANY_REQUESTS => {
                    if attempts >= max_attempts {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(
                            url = request.url(),
                            attempts,
                            "rate limit persisted, giving up"
                        );
                        return Err(FetchError::RetryExhausted { attempts });
                    }

                    let delay = self.retry_delay(response.retry_after.as_deref());

                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        url = request.url(),
                        attempts,
                        delay_ms = delay.as_millis() as u64,
                        "rate limited, retrying"
                    );

                    sleep(delay).await;
                }
                StatusCode::NOT_FOUND => return Ok(FetchOutcome::NotFound),
                status if !status.is_success() => {
                    return Err(FetchError::Http {
                        status: status.as_u16(),
                        body: response.body,
                    });
                }
                _ => {
                    return serde_json::from_str(&response.body)
                        .map(FetchOutcome::Success)
                        .map_err(|err| {
                            FetchError::Decode(format!(
                                "invalid response JSON: {err}; body: {}",
                                response.body
                            ))
                        });
                }
            }
        }
    }

    /// Server hint plus the safety margin.
    fn retry_delay(&self, retry_after: Option<&str>) -> Duration {
        let hint = parse_retry_after(retry_after)
            .unwrap_or_else(|| Duration::from_millis(self.options.default_retry_after_ms));

        #[cfg(feature = "tracing")]
        if hint > LONG_RETRY_AFTER {
            tracing::warn!(
                retry_after_secs = hint.as_secs(),
                "upstream asked for an unusually long rate-limit pause"
            );
        }

        hint.saturating_add(Duration::from_millis(self.options.safety_margin_ms))
    }
}

/// Parses a `Retry-After` value given in (possibly fractional) seconds.
///
/// Returns `None` for absent, non-numeric, negative or non-finite values;
/// the HTTP-date form is not supported and also yields `None`.
pub fn parse_retry_after(value: Option<&str>) -> Option<Duration> {
    let seconds: f64 = value?.trim().parse().ok()?;
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(seconds).ok()
}
