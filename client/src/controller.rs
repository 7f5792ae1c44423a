//! Page controller: every user-facing operation of the portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call these methods from event handlers; the controller talks
//! to the backend through `PortfolioApi` and writes results into the shared
//! `Portfolio` state, which components render from.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures are returned before any request is made and leave
//! state untouched. Backend failures are returned as they happen: there is
//! no retry and no rollback, so a sequence that fails half-way (marker saved,
//! comment not) stays half-done, exactly like the page it replaces.
//!
//! Requests are not cancelled or de-duplicated. Two overlapping operations
//! interleave freely and the last write to state wins.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use leptos::prelude::RwSignal;

use crate::net::api::{ApiError, HttpApi, PortfolioApi};
use crate::net::types::{Comment, CommentEdit, CommentId, LatLng, MarkerId, NewComment, NewMarker, Session};
use crate::state::comments::{ANONYMOUS_AUTHOR, CommentView};
use crate::state::form::{CommentForm, ValidationError};
use crate::state::map::{DEFAULT_LOCATION, FOCUS_ZOOM, PlacedMarker};
use crate::state::{Portfolio, PortfolioStore};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortfolioError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("page state is no longer available")]
    Detached,
}

/// The controller used by the browser page.
pub type PageController = PortfolioController<HttpApi, RwSignal<Portfolio>>;

#[derive(Clone, Copy, Debug)]
pub struct PortfolioController<A, S> {
    api: A,
    store: S,
}

impl<A, S> PortfolioController<A, S>
where
    A: PortfolioApi,
    S: PortfolioStore,
{
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    fn read<R>(&self, f: impl FnOnce(&Portfolio) -> R) -> Result<R, PortfolioError> {
        self.store.read_with(f).ok_or(PortfolioError::Detached)
    }

    fn write<R>(&self, f: impl FnOnce(&mut Portfolio) -> R) -> Result<R, PortfolioError> {
        self.store.write_with(f).ok_or(PortfolioError::Detached)
    }

    // =========================================================================
    // STARTUP
    // =========================================================================

    /// Page-load sequence: identity first, then the comment list and markers.
    ///
    /// # Errors
    ///
    /// Returns the first backend failure.
    pub async fn start(&self) -> Result<(), PortfolioError> {
        self.load_session().await?;
        let visible = self.read(|p| p.comments.visible)?;
        self.list_comments(visible).await?;
        Ok(())
    }

    /// Fetch the viewer's identity and pre-fill the author field.
    ///
    /// # Errors
    ///
    /// Returns an error if `/user-login` fails; the form stays disabled.
    pub async fn load_session(&self) -> Result<Session, PortfolioError> {
        self.write(|p| p.session.loading = true)?;
        let result = self.api.fetch_session().await;
        self.write(|p| {
            p.session.loading = false;
            if let Ok(session) = &result {
                if session.logged_in {
                    session.nickname.clone_into(&mut p.form.author);
                }
                p.session.session = Some(session.clone());
            }
        })?;
        Ok(result?)
    }

    // =========================================================================
    // PAGE CHROME
    // =========================================================================

    /// Select the tab titled `title`. Returns whether the selection changed.
    ///
    /// # Errors
    ///
    /// Returns `Detached` if the page state is gone.
    pub fn activate_tab(&self, title: &str) -> Result<bool, PortfolioError> {
        self.write(|p| p.tabs.activate(title))
    }

    /// Expand or collapse the info panel at `index`.
    ///
    /// # Errors
    ///
    /// Returns `Detached` if the page state is gone.
    pub fn toggle_panel(&self, index: usize, natural_height: u32) -> Result<bool, PortfolioError> {
        self.write(|p| p.panels.toggle(index, natural_height))
    }

    // =========================================================================
    // COMMENTS
    // =========================================================================

    /// Fetch up to `visible` comments, resolve their authors and replace the
    /// rendered list, then load each comment's marker.
    ///
    /// A marker that fails to load is logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if `/list-comments` fails; the previous list stays.
    pub async fn list_comments(&self, visible: usize) -> Result<usize, PortfolioError> {
        let comments = self.api.list_comments(visible).await?;
        let viewer = self.read(|p| p.session.user_id().map(str::to_owned))?;

        let mut views = Vec::with_capacity(comments.len());
        for comment in comments {
            views.push(self.resolve_author(comment, viewer.as_deref()).await);
        }
        let count = views.len();
        let tagged: Vec<(CommentId, MarkerId)> = views
            .iter()
            .filter_map(|view| view.comment.marker_id.map(|marker_id| (view.id(), marker_id)))
            .collect();

        self.write(|p| {
            p.comments.visible = visible;
            p.comments.replace(views);
            p.map.clear_markers();
        })?;

        for (comment_id, marker_id) in tagged {
            if let Err(e) = self.load_marker(comment_id, marker_id).await {
                leptos::logging::warn!("marker {marker_id} for comment {comment_id} failed to load: {e}");
            }
        }
        Ok(count)
    }

    async fn resolve_author(&self, comment: Comment, viewer: Option<&str>) -> CommentView {
        let fallback = comment.author.clone().unwrap_or_else(|| ANONYMOUS_AUTHOR.to_owned());
        let Some(user_id) = comment.user_id.clone() else {
            return CommentView { comment, author_name: fallback, owned: false };
        };
        let owned = viewer == Some(user_id.as_str());
        let author_name = match self.api.fetch_user(&user_id).await {
            Ok(user) => user.nickname,
            Err(e) => {
                leptos::logging::warn!("author {user_id} failed to resolve: {e}");
                fallback
            }
        };
        CommentView { comment, author_name, owned }
    }

    /// Validate the form and post it, as a new comment or as an edit of the
    /// comment under edit.
    ///
    /// The marker is created first so the comment can reference its id. It
    /// goes at the temporary marker; without one, an edit keeps the replaced
    /// marker's location and a new comment lands at the default location.
    ///
    /// # Errors
    ///
    /// Returns `Validation` without making any request when the text is blank
    /// or the viewer is signed out, otherwise the first backend failure.
    pub async fn submit_comment(&self) -> Result<(), PortfolioError> {
        let (draft, session, editing, chosen, hidden) = self.read(|p| {
            let session = p.session.session.clone().filter(|s| s.logged_in);
            let fallback = session.as_ref().map_or("", |s| s.nickname.as_str());
            let draft = p.form.validate(fallback);
            let editing = p.comments.editing.as_ref().map(|view| (view.id(), view.comment.marker_id));
            let hidden = p.map.hidden.as_ref().map(|placed| placed.marker.position());
            (draft, session, editing, p.map.temporary, hidden)
        })?;
        let draft = draft?;
        let session = session.ok_or(ValidationError::SignedOut)?;

        let position = match (chosen, editing.and_then(|(_, replaced)| replaced)) {
            (None, Some(replaced)) => match hidden {
                Some(position) => position,
                None => self.api.fetch_marker(replaced).await?.position(),
            },
            _ => chosen.unwrap_or(DEFAULT_LOCATION),
        };
        let marker_id = self.api.create_marker(&NewMarker { position, visible: draft.share_location }).await?;

        match editing {
            Some((id, replaced)) => {
                let edit = CommentEdit { id, text: draft.text.clone(), author: draft.author.clone(), marker_id };
                self.api.edit_comment(&edit).await?;
                if let Some(old) = replaced {
                    self.api.delete_marker(old).await?;
                }
            }
            None => {
                let comment = NewComment {
                    text: draft.text.clone(),
                    author: draft.author.clone(),
                    user_id: session.id.clone(),
                    marker_id,
                };
                self.api.create_comment(&comment).await?;
            }
        }

        if draft.author != session.nickname {
            self.api.update_nickname(&session.id, &draft.author).await?;
            self.write(|p| p.session.set_nickname(&draft.author))?;
        }

        let visible = self.write(|p| {
            p.map.clear_temporary();
            p.map.hidden = None;
            p.comments.editing = None;
            p.form.reset(&draft.author);
            p.comments.visible
        })?;
        self.list_comments(visible).await?;
        Ok(())
    }

    /// Apply an input change to the comment form.
    ///
    /// # Errors
    ///
    /// Returns `Detached` if the page state is gone.
    pub fn update_form(&self, f: impl FnOnce(&mut CommentForm)) -> Result<(), PortfolioError> {
        self.write(|p| f(&mut p.form))
    }

    /// Remove the comment and its marker from the page immediately, then
    /// delete both on the backend and refresh.
    ///
    /// # Errors
    ///
    /// Returns the first backend failure. The comment stays removed from the
    /// page either way.
    pub async fn delete_comment(&self, id: CommentId) -> Result<(), PortfolioError> {
        let marker_id = self.write(|p| {
            let editing = p.comments.is_editing(id);
            let marker_id = p.comments.remove(id).and_then(|view| view.comment.marker_id);
            if let Some(marker_id) = marker_id {
                p.map.remove(marker_id);
            }
            if editing {
                p.map.hidden = None;
                p.map.clear_temporary();
                let author = p.session.nickname().unwrap_or_default().to_owned();
                p.form.reset(&author);
            }
            marker_id
        })?;

        self.api.delete_comment(id).await?;
        if let Some(marker_id) = marker_id {
            self.api.delete_marker(marker_id).await?;
        }
        let visible = self.read(|p| p.comments.visible)?;
        self.list_comments(visible).await?;
        Ok(())
    }

    /// Put the comment `id` under edit: pre-fill the form and swap its marker
    /// for a draggable temporary one. Only the owner may edit.
    ///
    /// Returns `false` when the comment is unknown or not owned.
    ///
    /// # Errors
    ///
    /// Returns `Detached` if the page state is gone.
    pub fn begin_edit(&self, id: CommentId) -> Result<bool, PortfolioError> {
        self.write(|p| {
            let Some(view) = p.comments.get(id).filter(|view| view.owned).cloned() else {
                return false;
            };
            p.map.restore_hidden();
            p.map.clear_temporary();
            p.comments.editing = Some(view.clone());
            p.form.text = view.comment.text.clone();
            p.form.author = view.author_name.clone();
            if let Some(marker_id) = view.comment.marker_id {
                if let Some(position) = p.map.hide(marker_id) {
                    p.form.share_location = p.map.hidden.as_ref().is_none_or(|h| h.marker.visible);
                    p.map.place_temporary(position);
                }
            }
            true
        })
    }

    /// Leave edit mode, putting the original marker back.
    ///
    /// # Errors
    ///
    /// Returns `Detached` if the page state is gone.
    pub fn cancel_edit(&self) -> Result<(), PortfolioError> {
        self.write(|p| {
            if p.comments.editing.take().is_none() {
                return;
            }
            p.map.clear_temporary();
            p.map.restore_hidden();
            let author = p.session.nickname().unwrap_or_default().to_owned();
            p.form.reset(&author);
        })
    }

    // =========================================================================
    // MAP
    // =========================================================================

    /// Initialize the map view at the default location.
    ///
    /// # Errors
    ///
    /// Returns `Detached` if the page state is gone.
    pub fn create_map(&self) -> Result<(), PortfolioError> {
        self.write(|p| p.map.create())
    }

    /// Drop the temporary marker at `position`, discarding any previous one.
    ///
    /// # Errors
    ///
    /// Returns `Detached` if the page state is gone.
    pub fn place_temporary_marker(&self, position: LatLng) -> Result<(), PortfolioError> {
        self.write(|p| {
            p.map.place_temporary(position);
        })
    }

    /// Drag end on the temporary marker.
    ///
    /// # Errors
    ///
    /// Returns `Detached` if the page state is gone.
    pub fn move_temporary_marker(&self, position: LatLng) -> Result<bool, PortfolioError> {
        self.write(|p| p.map.move_temporary(position))
    }

    /// Click on the temporary marker removes it.
    ///
    /// # Errors
    ///
    /// Returns `Detached` if the page state is gone.
    pub fn remove_temporary_marker(&self) -> Result<Option<LatLng>, PortfolioError> {
        self.write(|p| p.map.clear_temporary())
    }

    /// Fetch marker `marker_id` and show it as the permanent marker of
    /// `comment_id`. Hidden markers only respond to clicks from the owner.
    /// The marker of the comment under edit stays off the map.
    ///
    /// # Errors
    ///
    /// Returns an error if `/markers?id=` fails.
    pub async fn load_marker(&self, comment_id: CommentId, marker_id: MarkerId) -> Result<(), PortfolioError> {
        let marker = self.api.fetch_marker(marker_id).await?;
        self.write(|p| {
            let owned = p.comments.get(comment_id).is_some_and(|view| view.owned);
            let interactive = marker.visible || owned;
            let placed = PlacedMarker { marker, comment: Some(comment_id), interactive };
            if p.comments.is_editing(comment_id) {
                p.map.hidden = Some(placed);
            } else {
                p.map.insert(placed);
            }
        })
    }

    /// Click on a permanent marker: pan to it and highlight its comment.
    ///
    /// Returns the highlighted comment. Unknown and non-interactive markers
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns `Detached` if the page state is gone.
    pub fn select_marker(&self, id: MarkerId) -> Result<Option<CommentId>, PortfolioError> {
        self.write(|p| {
            let placed = p.map.markers.get(&id).filter(|placed| placed.interactive)?;
            let position = placed.marker.position();
            let comment = placed.comment.or_else(|| p.comments.for_marker(id).map(CommentView::id));
            p.map.zoom = FOCUS_ZOOM;
            p.map.recenter(position);
            p.comments.select(comment);
            p.comments.selected
        })
    }

    /// Remove a saved marker from the map and the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if `/delete-marker` fails; the marker stays removed
    /// from the page.
    pub async fn delete_marker(&self, id: MarkerId) -> Result<(), PortfolioError> {
        self.write(|p| {
            p.map.remove(id);
            if p.map.hidden.as_ref().is_some_and(|h| h.marker.id == id) {
                p.map.hidden = None;
            }
        })?;
        self.api.delete_marker(id).await?;
        Ok(())
    }
}
