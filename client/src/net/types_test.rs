use super::*;

// =============================================================
// Comment
// =============================================================

#[test]
fn comment_deserializes_backend_shape() {
    let json = r#"{"id":42,"text":"hi there","userId":"u-7","markerId":9,"timestamp":1590000000000}"#;
    let comment: Comment = serde_json::from_str(json).unwrap();
    assert_eq!(comment.id, CommentId(42));
    assert_eq!(comment.text, "hi there");
    assert_eq!(comment.user_id.as_deref(), Some("u-7"));
    assert_eq!(comment.author, None);
    assert_eq!(comment.marker_id, Some(MarkerId(9)));
    assert_eq!(comment.timestamp, 1_590_000_000_000);
}

#[test]
fn comment_accepts_legacy_author_without_marker() {
    let json = r#"{"id":1,"text":"old","author":"Alice"}"#;
    let comment: Comment = serde_json::from_str(json).unwrap();
    assert_eq!(comment.author.as_deref(), Some("Alice"));
    assert_eq!(comment.user_id, None);
    assert_eq!(comment.marker_id, None);
    assert_eq!(comment.timestamp, 0);
}

#[test]
fn comment_id_accepts_integral_float() {
    let comment: Comment = serde_json::from_str(r#"{"id":5.0,"text":"x"}"#).unwrap();
    assert_eq!(comment.id, CommentId(5));
}

#[test]
fn comment_id_rejects_fractional_float() {
    let result = serde_json::from_str::<Comment>(r#"{"id":5.5,"text":"x"}"#);
    assert!(result.is_err());
}

#[test]
fn marker_id_accepts_numeric_string() {
    let id: MarkerId = serde_json::from_str(r#"" 17 ""#).unwrap();
    assert_eq!(id, MarkerId(17));
}

// =============================================================
// Marker
// =============================================================

#[test]
fn marker_position_matches_fields() {
    let marker: Marker = serde_json::from_str(r#"{"id":3,"visible":false,"lat":1.5,"lng":-2.25}"#).unwrap();
    assert!(!marker.visible);
    assert_eq!(marker.position(), LatLng::new(1.5, -2.25));
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_deserializes_logged_in_user() {
    let json = r#"{"email":"a@b.com","id":"123","nickname":"Ann","loggedIn":true,"toggleLoginURL":"/_ah/logout"}"#;
    let session: Session = serde_json::from_str(json).unwrap();
    assert!(session.logged_in);
    assert_eq!(session.id, "123");
    assert_eq!(session.nickname, "Ann");
    assert_eq!(session.toggle_login_url, "/_ah/logout");
    assert_eq!(session.email.as_deref(), Some("a@b.com"));
}

#[test]
fn session_deserializes_stranger_without_email() {
    let json = r#"{"id":"","nickname":"Stranger","loggedIn":false,"toggleLoginURL":"/_ah/login"}"#;
    let session: Session = serde_json::from_str(json).unwrap();
    assert!(!session.logged_in);
    assert!(session.id.is_empty());
    assert_eq!(session.email, None);
}

#[test]
fn user_info_defaults_logged_in_to_false() {
    let info: UserInfo = serde_json::from_str(r#"{"id":"9","nickname":"New User"}"#).unwrap();
    assert!(!info.logged_in);
    assert_eq!(info.nickname, "New User");
}

#[test]
fn ids_display_as_plain_numbers() {
    assert_eq!(CommentId(12).to_string(), "12");
    assert_eq!(MarkerId(-3).to_string(), "-3");
}
