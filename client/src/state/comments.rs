//! Comment-board state.
//!
//! DESIGN
//! ======
//! The list is a render-only copy of the backend's records and is replaced
//! wholesale on every refresh. At most one comment is being edited and at
//! most one is selected (highlighted after its marker was clicked); both are
//! stored as a single `Option` so the invariant holds by construction.
//!
//! The comment under edit is held as its own copy rather than an index into
//! `items`: a refresh that no longer lists it (a smaller visible count, or a
//! newer comment pushing it out) must not end the edit.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use crate::net::types::{Comment, CommentId, MarkerId};

/// Number of comments shown before the viewer picks another count.
pub const DEFAULT_VISIBLE_COMMENTS: usize = 3;

/// Counts offered by the "show N comments" selector.
pub const VISIBLE_COMMENT_CHOICES: [usize; 4] = [3, 5, 10, 20];

/// Author name used when a comment has neither a resolvable user nor a name.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// A comment ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct CommentView {
    pub comment: Comment,
    /// Resolved nickname of the author.
    pub author_name: String,
    /// Whether the signed-in viewer wrote it (and may edit or delete it).
    pub owned: bool,
}

impl CommentView {
    #[must_use]
    pub fn id(&self) -> CommentId {
        self.comment.id
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CommentsState {
    pub items: Vec<CommentView>,
    /// How many comments the last listing asked for.
    pub visible: usize,
    /// Comment under edit, kept until the edit is submitted or cancelled.
    pub editing: Option<CommentView>,
    pub selected: Option<CommentId>,
}

impl Default for CommentsState {
    fn default() -> Self {
        Self { items: Vec::new(), visible: DEFAULT_VISIBLE_COMMENTS, editing: None, selected: None }
    }
}

impl CommentsState {
    /// Replace the rendered list. A selection pointing at a comment that is
    /// no longer listed is dropped; the edit is kept and refreshed from the
    /// new list when it is still there.
    pub fn replace(&mut self, items: Vec<CommentView>) {
        self.items = items;
        if let Some(editing) = self.editing.as_mut() {
            if let Some(fresh) = self.items.iter().find(|view| view.id() == editing.id()) {
                editing.clone_from(fresh);
            }
        }
        if self.selected.is_some_and(|id| self.get(id).is_none()) {
            self.selected = None;
        }
    }

    #[must_use]
    pub fn get(&self, id: CommentId) -> Option<&CommentView> {
        self.items.iter().find(|view| view.id() == id)
    }

    /// Remove a comment from the rendered list.
    pub fn remove(&mut self, id: CommentId) -> Option<CommentView> {
        let index = self.items.iter().position(|view| view.id() == id)?;
        if self.is_editing(id) {
            self.editing = None;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.items.remove(index))
    }

    /// The comment tagged with `marker_id`, if it is rendered.
    #[must_use]
    pub fn for_marker(&self, marker_id: MarkerId) -> Option<&CommentView> {
        self.items.iter().find(|view| view.comment.marker_id == Some(marker_id))
    }

    /// Highlight `id`, clearing any previous highlight.
    pub fn select(&mut self, id: Option<CommentId>) {
        self.selected = id.filter(|id| self.get(*id).is_some());
    }

    #[must_use]
    pub fn editing_id(&self) -> Option<CommentId> {
        self.editing.as_ref().map(CommentView::id)
    }

    #[must_use]
    pub fn is_editing(&self, id: CommentId) -> bool {
        self.editing_id() == Some(id)
    }

    #[must_use]
    pub fn is_selected(&self, id: CommentId) -> bool {
        self.selected == Some(id)
    }
}
