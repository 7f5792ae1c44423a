use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::net::types::{Marker, UserInfo};
use crate::state::map::DEFAULT_LOCATION;
use crate::state::ui::{COMMENTS_TAB, GALLERY_TAB};

// =============================================================
// In-memory backend
// =============================================================

#[derive(Default)]
struct Backend {
    session: Option<Session>,
    users: BTreeMap<String, String>,
    comments: Vec<Comment>,
    markers: BTreeMap<i64, Marker>,
    next_id: i64,
    calls: Vec<String>,
    fail_markers: bool,
    fail_deletes: bool,
}

#[derive(Clone, Default)]
struct MockApi(Rc<RefCell<Backend>>);

impl MockApi {
    fn calls(&self) -> Vec<String> {
        self.0.borrow().calls.clone()
    }

    fn clear_calls(&self) {
        self.0.borrow_mut().calls.clear();
    }

    fn log(&self, call: String) {
        self.0.borrow_mut().calls.push(call);
    }

    fn next_id(&self) -> i64 {
        let mut backend = self.0.borrow_mut();
        backend.next_id += 1;
        backend.next_id
    }
}

#[async_trait(?Send)]
impl PortfolioApi for MockApi {
    async fn fetch_session(&self) -> Result<Session, ApiError> {
        self.log("GET /user-login".to_owned());
        self.0.borrow().session.clone().ok_or(ApiError::Status { endpoint: "/user-login", status: 500 })
    }

    async fn update_nickname(&self, user_id: &str, nickname: &str) -> Result<(), ApiError> {
        self.log(format!("POST /user-login {user_id} {nickname}"));
        self.0.borrow_mut().users.insert(user_id.to_owned(), nickname.to_owned());
        Ok(())
    }

    async fn list_comments(&self, visible: usize) -> Result<Vec<Comment>, ApiError> {
        self.log(format!("GET /list-comments?vis={visible}"));
        let backend = self.0.borrow();
        let mut comments = backend.comments.clone();
        comments.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        comments.truncate(visible);
        Ok(comments)
    }

    async fn fetch_user(&self, user_id: &str) -> Result<UserInfo, ApiError> {
        self.log(format!("GET /get-user?id={user_id}"));
        let nickname = self.0.borrow().users.get(user_id).cloned().unwrap_or_else(|| "New User".to_owned());
        Ok(UserInfo { id: user_id.to_owned(), nickname, logged_in: false })
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<(), ApiError> {
        self.log(format!("POST /new-comment marker={}", comment.marker_id));
        let id = self.next_id();
        self.0.borrow_mut().comments.push(Comment {
            id: CommentId(id),
            text: comment.text.clone(),
            user_id: Some(comment.user_id.clone()),
            author: None,
            marker_id: Some(comment.marker_id),
            timestamp: id,
        });
        Ok(())
    }

    async fn edit_comment(&self, edit: &CommentEdit) -> Result<(), ApiError> {
        self.log(format!("POST /edit-comment {} marker={}", edit.id, edit.marker_id));
        let mut backend = self.0.borrow_mut();
        if let Some(comment) = backend.comments.iter_mut().find(|c| c.id == edit.id) {
            comment.text.clone_from(&edit.text);
            comment.marker_id = Some(edit.marker_id);
        }
        Ok(())
    }

    async fn delete_comment(&self, id: CommentId) -> Result<(), ApiError> {
        self.log(format!("POST /delete-comment {id}"));
        let mut backend = self.0.borrow_mut();
        if backend.fail_deletes {
            return Err(ApiError::Status { endpoint: "/delete-comment", status: 500 });
        }
        backend.comments.retain(|c| c.id != id);
        Ok(())
    }

    async fn create_marker(&self, marker: &NewMarker) -> Result<MarkerId, ApiError> {
        self.log(format!("POST /markers {},{} visible={}", marker.position.lat, marker.position.lng, marker.visible));
        let id = self.next_id();
        self.0.borrow_mut().markers.insert(
            id,
            Marker { id: MarkerId(id), visible: marker.visible, lat: marker.position.lat, lng: marker.position.lng },
        );
        Ok(MarkerId(id))
    }

    async fn fetch_marker(&self, id: MarkerId) -> Result<Marker, ApiError> {
        self.log(format!("GET /markers?id={id}"));
        let backend = self.0.borrow();
        if backend.fail_markers {
            return Err(ApiError::Status { endpoint: "/markers", status: 500 });
        }
        backend.markers.get(&id.0).cloned().ok_or(ApiError::Status { endpoint: "/markers", status: 404 })
    }

    async fn delete_marker(&self, id: MarkerId) -> Result<(), ApiError> {
        self.log(format!("POST /delete-marker {id}"));
        self.0.borrow_mut().markers.remove(&id.0);
        Ok(())
    }
}

// =============================================================
// Fixtures
// =============================================================

type TestController = PortfolioController<MockApi, Rc<RefCell<Portfolio>>>;

fn ann_session() -> Session {
    Session {
        id: "ann".to_owned(),
        nickname: "Ann".to_owned(),
        logged_in: true,
        toggle_login_url: "/logout".to_owned(),
        email: Some("ann@example.com".to_owned()),
    }
}

fn stranger_session() -> Session {
    Session {
        id: String::new(),
        nickname: "Stranger".to_owned(),
        logged_in: false,
        toggle_login_url: "/login".to_owned(),
        email: None,
    }
}

/// Backend with Ann signed in, one comment by Ann and two by Bob, each tagged.
fn seeded_backend() -> MockApi {
    let api = MockApi::default();
    {
        let mut backend = api.0.borrow_mut();
        backend.session = Some(ann_session());
        backend.users.insert("ann".to_owned(), "Ann".to_owned());
        backend.users.insert("bob".to_owned(), "Bob".to_owned());
        let rows = [(1, "ann", "first!", true), (2, "bob", "nice photos", true), (3, "bob", "secret spot", false)];
        for (id, user, text, visible) in rows {
            let marker_id = 100 + id;
            backend.markers.insert(
                marker_id,
                Marker { id: MarkerId(marker_id), visible, lat: f64::from(u8::try_from(id).unwrap()), lng: 0.5 },
            );
            backend.comments.push(Comment {
                id: CommentId(id),
                text: text.to_owned(),
                user_id: Some(user.to_owned()),
                author: None,
                marker_id: Some(MarkerId(marker_id)),
                timestamp: id,
            });
        }
        backend.next_id = 1000;
    }
    api
}

fn controller(api: &MockApi) -> (TestController, Rc<RefCell<Portfolio>>) {
    let store = Rc::new(RefCell::new(Portfolio::default()));
    (PortfolioController::new(api.clone(), store.clone()), store)
}

fn started(api: &MockApi) -> (TestController, Rc<RefCell<Portfolio>>) {
    let (ctl, store) = controller(api);
    block_on(ctl.start()).unwrap();
    api.clear_calls();
    (ctl, store)
}

// =============================================================
// Startup and session
// =============================================================

#[test]
fn start_loads_session_then_comments_then_markers() {
    let api = seeded_backend();
    let (ctl, store) = controller(&api);
    block_on(ctl.start()).unwrap();

    let calls = api.calls();
    assert_eq!(calls[0], "GET /user-login");
    assert_eq!(calls[1], "GET /list-comments?vis=3");
    let first_marker = calls.iter().position(|c| c.starts_with("GET /markers")).unwrap();
    let last_user = calls.iter().rposition(|c| c.starts_with("GET /get-user")).unwrap();
    assert!(last_user < first_marker);

    let page = store.borrow();
    assert!(page.session.logged_in());
    assert_eq!(page.form.author, "Ann");
    assert_eq!(page.map.markers.len(), 3);
}

#[test]
fn logged_out_session_leaves_author_blank() {
    let api = seeded_backend();
    api.0.borrow_mut().session = Some(stranger_session());
    let (ctl, store) = controller(&api);
    let session = block_on(ctl.load_session()).unwrap();
    assert!(!session.logged_in);
    let page = store.borrow();
    assert!(!page.session.logged_in());
    assert!(page.form.author.is_empty());
    assert!(!page.session.loading);
}

#[test]
fn failed_session_fetch_keeps_form_disabled() {
    let api = MockApi::default();
    let (ctl, store) = controller(&api);
    let err = block_on(ctl.load_session()).unwrap_err();
    assert!(matches!(err, PortfolioError::Api(ApiError::Status { status: 500, .. })));
    assert!(store.borrow().session.session.is_none());
    assert!(!store.borrow().session.loading);
}

// =============================================================
// Chrome
// =============================================================

#[test]
fn activate_tab_and_toggle_panel_go_through_state() {
    let api = MockApi::default();
    let (ctl, store) = controller(&api);
    assert!(ctl.activate_tab(GALLERY_TAB).unwrap());
    assert!(!ctl.activate_tab(GALLERY_TAB).unwrap());
    assert!(!store.borrow().tabs.layout_wrappers_visible);
    assert!(ctl.activate_tab(COMMENTS_TAB).unwrap());
    assert!(store.borrow().tabs.layout_wrappers_visible);

    assert!(ctl.toggle_panel(0, 90).unwrap());
    assert_eq!(store.borrow().panels.panels[0].max_height, Some(90));
    assert!(api.calls().is_empty());
}

// =============================================================
// Listing
// =============================================================

#[test]
fn list_comments_renders_fixture_authors_and_text() {
    let api = seeded_backend();
    let (ctl, store) = controller(&api);
    block_on(ctl.load_session()).unwrap();

    let count = block_on(ctl.list_comments(3)).unwrap();
    assert_eq!(count, 3);

    let page = store.borrow();
    let rendered: Vec<(&str, &str, bool)> = page
        .comments
        .items
        .iter()
        .map(|v| (v.author_name.as_str(), v.comment.text.as_str(), v.owned))
        .collect();
    assert_eq!(
        rendered,
        vec![("Bob", "secret spot", false), ("Bob", "nice photos", false), ("Ann", "first!", true)]
    );
}

#[test]
fn list_comments_respects_visible_count() {
    let api = seeded_backend();
    let (ctl, store) = started(&api);
    assert_eq!(block_on(ctl.list_comments(1)).unwrap(), 1);
    assert_eq!(store.borrow().comments.visible, 1);
    assert_eq!(store.borrow().map.markers.len(), 1);
    assert_eq!(api.calls()[0], "GET /list-comments?vis=1");
}

#[test]
fn hidden_marker_is_interactive_only_for_owner() {
    let api = seeded_backend();
    let (_ctl, store) = started(&api);
    let page = store.borrow();
    assert!(page.map.markers[&MarkerId(101)].interactive);
    assert!(page.map.markers[&MarkerId(102)].interactive);
    assert!(!page.map.markers[&MarkerId(103)].interactive);
    assert_eq!(page.map.markers[&MarkerId(103)].comment, Some(CommentId(3)));
}

#[test]
fn legacy_comment_without_user_uses_stored_author() {
    let api = MockApi::default();
    api.0.borrow_mut().comments.push(Comment {
        id: CommentId(1),
        text: "hello".to_owned(),
        user_id: None,
        author: Some("Alice".to_owned()),
        marker_id: None,
        timestamp: 1,
    });
    let (ctl, store) = controller(&api);
    block_on(ctl.list_comments(3)).unwrap();
    let page = store.borrow();
    assert_eq!(page.comments.items[0].author_name, "Alice");
    assert!(!page.comments.items[0].owned);
    assert!(!api.calls().iter().any(|c| c.starts_with("GET /get-user")));
}

#[test]
fn marker_failures_do_not_fail_the_listing() {
    let api = seeded_backend();
    api.0.borrow_mut().fail_markers = true;
    let (ctl, store) = controller(&api);
    assert_eq!(block_on(ctl.list_comments(3)).unwrap(), 3);
    assert!(store.borrow().map.markers.is_empty());
}

// =============================================================
// Submitting
// =============================================================

#[test]
fn empty_comment_issues_no_request_and_keeps_list() {
    let api = seeded_backend();
    let (ctl, store) = started(&api);
    let before = store.borrow().clone();
    store.borrow_mut().form.text = "   ".to_owned();

    let err = block_on(ctl.submit_comment()).unwrap_err();
    assert_eq!(err, PortfolioError::Validation(ValidationError::EmptyText));
    assert!(api.calls().is_empty());
    assert_eq!(store.borrow().comments, before.comments);
}

#[test]
fn signed_out_submit_is_rejected_before_any_request() {
    let api = seeded_backend();
    api.0.borrow_mut().session = Some(stranger_session());
    let (ctl, store) = started(&api);
    store.borrow_mut().form.text = "hi".to_owned();
    let err = block_on(ctl.submit_comment()).unwrap_err();
    assert_eq!(err, PortfolioError::Validation(ValidationError::SignedOut));
    assert!(api.calls().is_empty());
}

#[test]
fn submit_posts_marker_first_then_comment_with_returned_id() {
    let api = seeded_backend();
    let (ctl, store) = started(&api);
    ctl.place_temporary_marker(LatLng::new(48.5, 2.25)).unwrap();
    store.borrow_mut().form.text = "bonjour".to_owned();

    block_on(ctl.submit_comment()).unwrap();

    let calls = api.calls();
    assert_eq!(calls[0], "POST /markers 48.5,2.25 visible=true");
    assert_eq!(calls[1], "POST /new-comment marker=1001");
    assert_eq!(calls[2], "GET /list-comments?vis=3");

    let page = store.borrow();
    assert!(page.map.temporary.is_none());
    assert!(page.form.text.is_empty());
    assert_eq!(page.comments.items[0].comment.text, "bonjour");
    assert!(page.comments.items[0].owned);
    assert!(page.map.markers.contains_key(&MarkerId(1001)));
}

#[test]
fn submit_without_temporary_marker_uses_default_location() {
    let api = seeded_backend();
    let (ctl, store) = started(&api);
    {
        let mut page = store.borrow_mut();
        page.form.text = "hi".to_owned();
        page.form.share_location = false;
    }
    block_on(ctl.submit_comment()).unwrap();
    let expected = format!("POST /markers {},{} visible=false", DEFAULT_LOCATION.lat, DEFAULT_LOCATION.lng);
    assert_eq!(api.calls()[0], expected);
}

#[test]
fn submit_with_changed_nickname_syncs_session() {
    let api = seeded_backend();
    let (ctl, store) = started(&api);
    {
        let mut page = store.borrow_mut();
        page.form.text = "renamed".to_owned();
        page.form.author = "Annie".to_owned();
    }
    block_on(ctl.submit_comment()).unwrap();

    assert!(api.calls().contains(&"POST /user-login ann Annie".to_owned()));
    let page = store.borrow();
    assert_eq!(page.session.nickname(), Some("Annie"));
    assert_eq!(page.form.author, "Annie");
    assert_eq!(page.comments.items[0].author_name, "Annie");
}

#[test]
fn submit_with_unchanged_nickname_skips_sync() {
    let api = seeded_backend();
    let (ctl, _store) = started(&api);
    ctl.update_form(|form| form.text = "same name".to_owned()).unwrap();
    block_on(ctl.submit_comment()).unwrap();
    assert!(!api.calls().iter().any(|c| c.starts_with("POST /user-login")));
}

// =============================================================
// Editing
// =============================================================

#[test]
fn begin_edit_prefills_form_and_swaps_marker() {
    let api = seeded_backend();
    let (ctl, store) = started(&api);
    assert!(ctl.begin_edit(CommentId(1)).unwrap());

    let page = store.borrow();
    assert!(page.comments.is_editing(CommentId(1)));
    assert_eq!(page.form.text, "first!");
    assert_eq!(page.form.author, "Ann");
    assert!(!page.map.markers.contains_key(&MarkerId(101)));
    assert_eq!(page.map.temporary, Some(LatLng::new(1.0, 0.5)));
    assert!(api.calls().is_empty());
}

#[test]
fn begin_edit_refuses_comment_owned_by_someone_else() {
    let api = seeded_backend();
    let (ctl, store) = started(&api);
    assert!(!ctl.begin_edit(CommentId(2)).unwrap());
    assert!(store.borrow().comments.editing.is_none());
    assert!(store.borrow().map.markers.contains_key(&MarkerId(102)));
}

#[test]
fn cancel_edit_restores_marker_and_form() {
    let api = seeded_backend();
    let (ctl, store) = started(&api);
    ctl.begin_edit(CommentId(1)).unwrap();
    ctl.cancel_edit().unwrap();
    let page = store.borrow();
    assert!(page.comments.editing.is_none());
    assert!(page.map.temporary.is_none());
    assert!(page.map.markers.contains_key(&MarkerId(101)));
    assert!(page.form.text.is_empty());
}

#[test]
fn submit_while_editing_replaces_comment_and_old_marker() {
    let api = seeded_backend();
    let (ctl, store) = started(&api);
    ctl.begin_edit(CommentId(1)).unwrap();
    ctl.move_temporary_marker(LatLng::new(5.0, 6.0)).unwrap();
    store.borrow_mut().form.text = "first! (edited)".to_owned();

    block_on(ctl.submit_comment()).unwrap();

    let calls = api.calls();
    assert_eq!(calls[0], "POST /markers 5,6 visible=true");
    assert_eq!(calls[1], "POST /edit-comment 1 marker=1001");
    assert_eq!(calls[2], "POST /delete-marker 101");
    assert!(!calls.iter().any(|c| c.starts_with("POST /new-comment")));

    let page = store.borrow();
    assert!(page.comments.editing.is_none());
    assert_eq!(page.comments.items.len(), 3);
    let edited = page.comments.get(CommentId(1)).unwrap();
    assert_eq!(edited.comment.text, "first! (edited)");
    assert_eq!(page.map.markers[&MarkerId(1001)].marker.position(), LatLng::new(5.0, 6.0));
}

#[test]
fn edit_survives_refresh_that_no_longer_lists_it() {
    let api = seeded_backend();
    let (ctl, store) = started(&api);
    ctl.begin_edit(CommentId(1)).unwrap();
    block_on(ctl.list_comments(1)).unwrap();
    {
        let page = store.borrow();
        assert!(page.comments.get(CommentId(1)).is_none());
        assert!(page.comments.is_editing(CommentId(1)));
        assert_eq!(page.map.temporary, Some(LatLng::new(1.0, 0.5)));
    }
    api.clear_calls();

    block_on(ctl.submit_comment()).unwrap();

    let calls = api.calls();
    assert_eq!(calls[0], "POST /markers 1,0.5 visible=true");
    assert_eq!(calls[1], "POST /edit-comment 1 marker=1001");
    assert_eq!(calls[2], "POST /delete-marker 101");
    assert!(!calls.iter().any(|c| c.starts_with("POST /new-comment")));
    assert_eq!(api.0.borrow().comments.len(), 3);
    assert!(store.borrow().comments.editing.is_none());
}

#[test]
fn cancel_after_edited_comment_left_the_list_resets_form() {
    let api = seeded_backend();
    let (ctl, store) = started(&api);
    ctl.begin_edit(CommentId(1)).unwrap();
    block_on(ctl.list_comments(1)).unwrap();
    ctl.cancel_edit().unwrap();
    let page = store.borrow();
    assert!(page.comments.editing.is_none());
    assert!(page.map.temporary.is_none());
    assert!(page.form.text.is_empty());
}

#[test]
fn text_only_edit_keeps_location_of_marker_that_never_loaded() {
    let api = seeded_backend();
    api.0.borrow_mut().fail_markers = true;
    let (ctl, store) = started(&api);
    api.0.borrow_mut().fail_markers = false;

    assert!(ctl.begin_edit(CommentId(1)).unwrap());
    assert!(store.borrow().map.temporary.is_none());
    store.borrow_mut().form.text = "first! (typo fixed)".to_owned();
    block_on(ctl.submit_comment()).unwrap();

    let calls = api.calls();
    assert_eq!(calls[0], "GET /markers?id=101");
    assert_eq!(calls[1], "POST /markers 1,0.5 visible=true");
    assert_eq!(calls[2], "POST /edit-comment 1 marker=1001");
    assert_eq!(calls[3], "POST /delete-marker 101");
}

#[test]
fn edit_without_temporary_marker_reuses_hidden_location() {
    let api = seeded_backend();
    let (ctl, _store) = started(&api);
    ctl.begin_edit(CommentId(1)).unwrap();
    ctl.remove_temporary_marker().unwrap();
    ctl.update_form(|form| form.text = "moved nowhere".to_owned()).unwrap();
    block_on(ctl.submit_comment()).unwrap();

    let calls = api.calls();
    assert_eq!(calls[0], "POST /markers 1,0.5 visible=true");
    assert_eq!(calls[1], "POST /edit-comment 1 marker=1001");
}

// =============================================================
// Deleting
// =============================================================

#[test]
fn delete_comment_leaves_page_before_backend_answers() {
    let api = seeded_backend();
    let (ctl, store) = started(&api);
    api.0.borrow_mut().fail_deletes = true;

    let err = block_on(ctl.delete_comment(CommentId(1))).unwrap_err();
    assert_eq!(err, PortfolioError::Api(ApiError::Status { endpoint: "/delete-comment", status: 500 }));
    assert_eq!(api.calls(), vec!["POST /delete-comment 1".to_owned()]);

    let page = store.borrow();
    assert!(page.comments.get(CommentId(1)).is_none());
    assert!(!page.map.markers.contains_key(&MarkerId(101)));
    assert_eq!(page.comments.items.len(), 2);
    assert_eq!(api.0.borrow().comments.len(), 3);
}

#[test]
fn delete_comment_removes_element_and_marker() {
    let api = seeded_backend();
    let (ctl, store) = started(&api);
    block_on(ctl.delete_comment(CommentId(1))).unwrap();

    let calls = api.calls();
    assert_eq!(calls[0], "POST /delete-comment 1");
    assert_eq!(calls[1], "POST /delete-marker 101");

    let page = store.borrow();
    assert!(page.comments.get(CommentId(1)).is_none());
    assert!(!page.map.markers.contains_key(&MarkerId(101)));
    assert_eq!(page.comments.items.len(), 2);
}

#[test]
fn deleting_comment_under_edit_resets_form() {
    let api = seeded_backend();
    let (ctl, store) = started(&api);
    ctl.begin_edit(CommentId(1)).unwrap();
    block_on(ctl.delete_comment(CommentId(1))).unwrap();
    let page = store.borrow();
    assert!(page.comments.editing.is_none());
    assert!(page.map.temporary.is_none());
    assert!(page.map.hidden.is_none());
    assert!(page.form.text.is_empty());
    assert_eq!(page.form.author, "Ann");
}

#[test]
fn refresh_during_edit_keeps_edited_marker_hidden() {
    let api = seeded_backend();
    let (ctl, store) = started(&api);
    ctl.begin_edit(CommentId(1)).unwrap();
    block_on(ctl.list_comments(3)).unwrap();
    let page = store.borrow();
    assert!(page.comments.is_editing(CommentId(1)));
    assert!(!page.map.markers.contains_key(&MarkerId(101)));
    assert_eq!(page.map.hidden.as_ref().map(|h| h.marker.id), Some(MarkerId(101)));
}

#[test]
fn delete_marker_drops_table_entry() {
    let api = seeded_backend();
    let (ctl, store) = started(&api);
    block_on(ctl.delete_marker(MarkerId(102))).unwrap();
    assert!(!store.borrow().map.markers.contains_key(&MarkerId(102)));
    assert_eq!(api.calls(), vec!["POST /delete-marker 102".to_owned()]);
}

// =============================================================
// Map
// =============================================================

#[test]
fn create_map_centers_on_default() {
    let api = MockApi::default();
    let (ctl, store) = controller(&api);
    ctl.create_map().unwrap();
    assert!(store.borrow().map.created);
    assert_eq!(store.borrow().map.center, DEFAULT_LOCATION);
}

#[test]
fn two_temporary_markers_leave_exactly_one() {
    let api = MockApi::default();
    let (ctl, store) = controller(&api);
    ctl.place_temporary_marker(LatLng::new(1.0, 1.0)).unwrap();
    ctl.place_temporary_marker(LatLng::new(2.0, 2.0)).unwrap();
    assert_eq!(store.borrow().map.temporary, Some(LatLng::new(2.0, 2.0)));
    assert_eq!(ctl.remove_temporary_marker().unwrap(), Some(LatLng::new(2.0, 2.0)));
    assert!(store.borrow().map.temporary.is_none());
}

#[test]
fn select_marker_highlights_single_comment_and_pans() {
    let api = seeded_backend();
    let (ctl, store) = started(&api);
    assert_eq!(ctl.select_marker(MarkerId(101)).unwrap(), Some(CommentId(1)));
    assert_eq!(ctl.select_marker(MarkerId(102)).unwrap(), Some(CommentId(2)));

    let page = store.borrow();
    assert!(page.comments.is_selected(CommentId(2)));
    assert!(!page.comments.is_selected(CommentId(1)));
    assert_eq!(page.map.center, LatLng::new(2.0, 0.5));
    assert_eq!(page.map.zoom, FOCUS_ZOOM);
}

#[test]
fn select_non_interactive_marker_is_ignored() {
    let api = seeded_backend();
    let (ctl, store) = started(&api);
    ctl.select_marker(MarkerId(101)).unwrap();
    assert_eq!(ctl.select_marker(MarkerId(103)).unwrap(), None);
    assert!(store.borrow().comments.is_selected(CommentId(1)));
}
