//! Forwarding handler for the comment backend endpoints.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::backend::{ForwardRequest, forward_error_to_status};
use crate::state::AppState;

/// Relay the request to the backend and return its response.
///
/// Unreachable backend → `502 Bad Gateway`, timeout → `504 Gateway Timeout`.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path().to_owned(), ToString::to_string);
    let request = ForwardRequest { method: method.clone(), path_and_query, headers, body };

    match state.backend.forward(request).await {
        Ok(forwarded) => {
            tracing::debug!(%method, %uri, status = forwarded.status.as_u16(), "forwarded");
            let mut response = Response::new(Body::from(forwarded.body));
            *response.status_mut() = forwarded.status;
            *response.headers_mut() = forwarded.headers;
            response
        }
        Err(e) => {
            let status = forward_error_to_status(&e);
            tracing::warn!(%method, %uri, error = %e, status = status.as_u16(), "forward failed");
            (status, status_message(status)).into_response()
        }
    }
}

fn status_message(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("backend error")
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
