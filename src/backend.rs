//! HTTP client for the external comment backend.
//!
//! DESIGN
//! ======
//! The backend owns comments, markers and user identities. This server only
//! relays the browser's requests so page and API share one origin and the
//! backend's session cookie reaches it. Requests and responses pass through
//! unchanged apart from a fixed allow-list of headers; redirects are returned
//! to the browser rather than followed, since login and logout rely on them.

use axum::body::Bytes;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode};

use crate::config::ServerConfig;

/// Request headers copied to the backend.
pub static FORWARDED_REQUEST_HEADERS: [HeaderName; 2] = [CONTENT_TYPE, COOKIE];

/// Response headers copied back to the browser.
pub static FORWARDED_RESPONSE_HEADERS: [HeaderName; 3] = [CONTENT_TYPE, LOCATION, SET_COOKIE];

#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("backend client build failed: {0}")]
    ClientBuild(String),
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("backend timed out")]
    Timeout,
    #[error("backend response body failed: {0}")]
    Body(String),
}

/// Map a forwarding failure to the status returned to the browser.
#[must_use]
pub fn forward_error_to_status(err: &ForwardError) -> StatusCode {
    match err {
        ForwardError::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ForwardError::Unreachable(_) | ForwardError::Body(_) => StatusCode::BAD_GATEWAY,
        ForwardError::Timeout => StatusCode::GATEWAY_TIMEOUT,
    }
}

/// One browser request to relay.
#[derive(Debug, Clone)]
pub struct ForwardRequest {
    pub method: Method,
    /// Path plus query string, e.g. `/list-comments?vis=3`.
    pub path_and_query: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// The backend's answer, filtered to the forwarded headers.
#[derive(Debug, Clone)]
pub struct ForwardResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// # Errors
    ///
    /// Returns `ClientBuild` if the TLS backend cannot be initialized.
    pub fn new(config: &ServerConfig) -> Result<Self, ForwardError> {
        let http = reqwest::Client::builder()
            .timeout(config.backend_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ForwardError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.backend_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Relay `request` to the backend and collect its full response.
    ///
    /// # Errors
    ///
    /// Returns `Unreachable` or `Timeout` when no response arrives and `Body`
    /// when the response body cannot be read. Non-2xx statuses are not errors.
    pub async fn forward(&self, request: ForwardRequest) -> Result<ForwardResponse, ForwardError> {
        let url = format!("{}{}", self.base_url, request.path_and_query);
        let headers = copy_headers(&request.headers, &FORWARDED_REQUEST_HEADERS);

        let response = self
            .http
            .request(request.method, &url)
            .headers(headers)
            .body(request.body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        let headers = copy_headers(response.headers(), &FORWARDED_RESPONSE_HEADERS);
        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() { ForwardError::Timeout } else { ForwardError::Body(e.to_string()) }
        })?;

        Ok(ForwardResponse { status, headers, body })
    }
}

/// Copy every value of each header in `names` from `source`.
#[must_use]
pub fn copy_headers(source: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut copied = HeaderMap::new();
    for name in names {
        for value in source.get_all(name) {
            copied.append(name.clone(), value.clone());
        }
    }
    copied
}

fn classify(err: reqwest::Error) -> ForwardError {
    if err.is_timeout() { ForwardError::Timeout } else { ForwardError::Unreachable(err.to_string()) }
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
