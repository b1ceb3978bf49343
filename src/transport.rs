use std::{future::Future, time::Duration};

use reqwest::{header, StatusCode};

use crate::{FetchError, RequestDescriptor};

/// Status, rate-limit hint and body of one HTTP round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    /// Raw `Retry-After` header value, if the server sent one.
    pub retry_after: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            retry_after: None,
            body: body.into(),
        }
    }

    pub fn with_retry_after(mut self, value: impl Into<String>) -> Self {
        self.retry_after = Some(value.into());
        self
    }
}

/// Performs a single GET round trip. Implemented over `reqwest` for real
/// traffic and by in-memory fakes in tests.
pub trait Transport {
    fn get(
        &self,
        request: &RequestDescriptor,
        timeout: Duration,
    ) -> impl Future<Output = Result<RawResponse, FetchError>> + Send;
}

/// `reqwest`-backed transport. Cloning shares the connection pool.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn get(
        &self,
        request: &RequestDescriptor,
        timeout: Duration,
    ) -> Result<RawResponse, FetchError> {
        let mut builder = self.http.get(request.url()).timeout(timeout);
        if !request.query_pairs().is_empty() {
            builder = builder.query(request.query_pairs());
        }
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status();
        let retry_after = response
            .headers()
            .get(header::RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await?;

        Ok(RawResponse {
            status,
            retry_after,
            body,
        })
    }
}
