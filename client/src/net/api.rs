//! HTTP client for the comment/marker backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `ApiError::Unavailable` since the
//! endpoints are only meaningful in the browser, where the backend's session
//! cookie is attached.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<_, ApiError>` instead of panicking. There are no
//! retries or timeouts; callers log the error and leave page state as it was
//! before the request.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Comment, CommentEdit, CommentId, Marker, MarkerId, NewComment, NewMarker, Session, UserInfo};

pub const USER_LOGIN_ENDPOINT: &str = "/user-login";
pub const LIST_COMMENTS_ENDPOINT: &str = "/list-comments";
pub const GET_USER_ENDPOINT: &str = "/get-user";
pub const NEW_COMMENT_ENDPOINT: &str = "/new-comment";
pub const EDIT_COMMENT_ENDPOINT: &str = "/edit-comment";
pub const DELETE_COMMENT_ENDPOINT: &str = "/delete-comment";
pub const MARKERS_ENDPOINT: &str = "/markers";
pub const DELETE_MARKER_ENDPOINT: &str = "/delete-marker";

/// Every path the backend serves. The front server forwards exactly these.
pub const BACKEND_ENDPOINTS: [&str; 8] = [
    USER_LOGIN_ENDPOINT,
    LIST_COMMENTS_ENDPOINT,
    GET_USER_ENDPOINT,
    NEW_COMMENT_ENDPOINT,
    EDIT_COMMENT_ENDPOINT,
    DELETE_COMMENT_ENDPOINT,
    MARKERS_ENDPOINT,
    DELETE_MARKER_ENDPOINT,
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {message}")]
    Network { endpoint: &'static str, message: String },
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("could not decode {endpoint} response: {message}")]
    Decode { endpoint: &'static str, message: String },
    #[error("backend requests are only available in the browser")]
    Unavailable,
}

/// Operations the page performs against the backend.
///
/// `?Send` because browser futures hold `JsValue`s.
#[async_trait(?Send)]
pub trait PortfolioApi {
    /// `GET /user-login`.
    async fn fetch_session(&self) -> Result<Session, ApiError>;
    /// `POST /user-login` with the new nickname.
    async fn update_nickname(&self, user_id: &str, nickname: &str) -> Result<(), ApiError>;
    /// `GET /list-comments?vis=N`.
    async fn list_comments(&self, visible: usize) -> Result<Vec<Comment>, ApiError>;
    /// `GET /get-user?id=`.
    async fn fetch_user(&self, user_id: &str) -> Result<UserInfo, ApiError>;
    /// `POST /new-comment`.
    async fn create_comment(&self, comment: &NewComment) -> Result<(), ApiError>;
    /// `POST /edit-comment`.
    async fn edit_comment(&self, edit: &CommentEdit) -> Result<(), ApiError>;
    /// `POST /delete-comment`.
    async fn delete_comment(&self, id: CommentId) -> Result<(), ApiError>;
    /// `POST /markers`, returning the id the backend assigned.
    async fn create_marker(&self, marker: &NewMarker) -> Result<MarkerId, ApiError>;
    /// `GET /markers?id=`.
    async fn fetch_marker(&self, id: MarkerId) -> Result<Marker, ApiError>;
    /// `POST /delete-marker`.
    async fn delete_marker(&self, id: MarkerId) -> Result<(), ApiError>;
}

// =============================================================================
// REQUEST BUILDING
// =============================================================================

/// URL-encode `(name, value)` pairs as an `application/x-www-form-urlencoded` body.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn form_body(fields: &[(&str, &str)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in fields {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn endpoint_with_query(endpoint: &str, name: &str, value: &str) -> String {
    format!("{endpoint}?{}", form_body(&[(name, value)]))
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn list_comments_url(visible: usize) -> String {
    endpoint_with_query(LIST_COMMENTS_ENDPOINT, "vis", &visible.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn get_user_url(user_id: &str) -> String {
    endpoint_with_query(GET_USER_ENDPOINT, "id", user_id)
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn marker_url(id: MarkerId) -> String {
    endpoint_with_query(MARKERS_ENDPOINT, "id", &id.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn new_marker_form(marker: &NewMarker) -> String {
    form_body(&[
        ("lat", &marker.position.lat.to_string()),
        ("lng", &marker.position.lng.to_string()),
        ("visible", if marker.visible { "true" } else { "false" }),
    ])
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn new_comment_form(comment: &NewComment) -> String {
    form_body(&[
        ("comment-text", &comment.text),
        ("comment-author", &comment.author),
        ("user-id", &comment.user_id),
        ("marker-id", &comment.marker_id.to_string()),
    ])
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn edit_comment_form(edit: &CommentEdit) -> String {
    form_body(&[
        ("id", &edit.id.to_string()),
        ("comment-text", &edit.text),
        ("comment-author", &edit.author),
        ("marker-id", &edit.marker_id.to_string()),
    ])
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn nickname_form(user_id: &str, nickname: &str) -> String {
    form_body(&[("id", user_id), ("nickname", nickname)])
}

/// `POST /markers` answers with the bare numeric id as the body.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_marker_id(body: &str) -> Result<MarkerId, ApiError> {
    body.trim()
        .parse::<i64>()
        .map(MarkerId)
        .map_err(|e| ApiError::Decode { endpoint: MARKERS_ENDPOINT, message: e.to_string() })
}

// =============================================================================
// BROWSER CLIENT
// =============================================================================

/// `PortfolioApi` backed by same-origin `fetch` requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, Response};
    use serde::de::DeserializeOwned;

    use super::ApiError;

    const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

    fn network(endpoint: &'static str, err: &gloo_net::Error) -> ApiError {
        ApiError::Network { endpoint, message: err.to_string() }
    }

    fn check(endpoint: &'static str, resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            Ok(resp)
        } else {
            Err(ApiError::Status { endpoint, status: resp.status() })
        }
    }

    pub(super) async fn get_json<T: DeserializeOwned>(endpoint: &'static str, url: &str) -> Result<T, ApiError> {
        let resp = Request::get(url)
            .send()
            .await
            .map_err(|e| network(endpoint, &e))?;
        let resp = check(endpoint, resp)?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode { endpoint, message: e.to_string() })
    }

    pub(super) async fn post_form(endpoint: &'static str, body: String) -> Result<String, ApiError> {
        let resp = Request::post(endpoint)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(body)
            .map_err(|e| network(endpoint, &e))?
            .send()
            .await
            .map_err(|e| network(endpoint, &e))?;
        let resp = check(endpoint, resp)?;
        resp.text().await.map_err(|e| network(endpoint, &e))
    }
}

#[async_trait(?Send)]
impl PortfolioApi for HttpApi {
    async fn fetch_session(&self) -> Result<Session, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            http::get_json(USER_LOGIN_ENDPOINT, USER_LOGIN_ENDPOINT).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn update_nickname(&self, user_id: &str, nickname: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            http::post_form(USER_LOGIN_ENDPOINT, nickname_form(user_id, nickname)).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, nickname);
            Err(ApiError::Unavailable)
        }
    }

    async fn list_comments(&self, visible: usize) -> Result<Vec<Comment>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            http::get_json(LIST_COMMENTS_ENDPOINT, &list_comments_url(visible)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = visible;
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_user(&self, user_id: &str) -> Result<UserInfo, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            http::get_json(GET_USER_ENDPOINT, &get_user_url(user_id)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
            Err(ApiError::Unavailable)
        }
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            http::post_form(NEW_COMMENT_ENDPOINT, new_comment_form(comment)).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = comment;
            Err(ApiError::Unavailable)
        }
    }

    async fn edit_comment(&self, edit: &CommentEdit) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            http::post_form(EDIT_COMMENT_ENDPOINT, edit_comment_form(edit)).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = edit;
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_comment(&self, id: CommentId) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            http::post_form(DELETE_COMMENT_ENDPOINT, form_body(&[("id", &id.to_string())])).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    async fn create_marker(&self, marker: &NewMarker) -> Result<MarkerId, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = http::post_form(MARKERS_ENDPOINT, new_marker_form(marker)).await?;
            parse_marker_id(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = marker;
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_marker(&self, id: MarkerId) -> Result<Marker, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            http::get_json(MARKERS_ENDPOINT, &marker_url(id)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_marker(&self, id: MarkerId) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            http::post_form(DELETE_MARKER_ENDPOINT, form_body(&[("id", &id.to_string())])).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }
}
