//! Wire DTOs for the comment/marker backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (camelCase, `toggleLoginURL`) so the
//! types deserialize backend responses directly. Identifiers are wrapped in
//! newtypes so comment and marker ids cannot be swapped by accident.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Backend identifier of a comment record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(#[serde(deserialize_with = "deserialize_i64_from_number")] pub i64);

/// Backend identifier of a map marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerId(#[serde(deserialize_with = "deserialize_i64_from_number")] pub i64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A geographic coordinate in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A comment as returned by `/list-comments`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    /// Comment body.
    #[serde(default)]
    pub text: String,
    /// Author user id, when the comment was posted by a signed-in user.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Free-form author name, used by comments that predate user ids.
    #[serde(default)]
    pub author: Option<String>,
    /// Marker tagged with this comment, if any.
    #[serde(default)]
    pub marker_id: Option<MarkerId>,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub timestamp: i64,
}

/// A persisted map marker as returned by `GET /markers?id=`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: MarkerId,
    /// Whether viewers other than the comment author may interact with it.
    pub visible: bool,
    pub lat: f64,
    pub lng: f64,
}

impl Marker {
    #[must_use]
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// The viewer's identity as returned by `GET /user-login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Backend user id; empty when logged out.
    #[serde(default)]
    pub id: String,
    pub nickname: String,
    pub logged_in: bool,
    /// Login URL when logged out, logout URL when logged in.
    #[serde(rename = "toggleLoginURL", default)]
    pub toggle_login_url: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A user record as returned by `GET /get-user?id=`.
///
/// `logged_in` is true only when the requested user is the current viewer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub nickname: String,
    #[serde(default)]
    pub logged_in: bool,
}

/// Form fields for `POST /markers`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NewMarker {
    pub position: LatLng,
    pub visible: bool,
}

/// Form fields for `POST /new-comment`.
#[derive(Clone, Debug, PartialEq)]
pub struct NewComment {
    pub text: String,
    pub author: String,
    pub user_id: String,
    pub marker_id: MarkerId,
}

/// Form fields for `POST /edit-comment`.
#[derive(Clone, Debug, PartialEq)]
pub struct CommentEdit {
    pub id: CommentId,
    pub text: String,
    pub author: String,
    pub marker_id: MarkerId,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer string, got {text:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
