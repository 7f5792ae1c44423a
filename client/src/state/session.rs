//! Session state for the current viewer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loaded once at page start. Gates the comment form and drives the greeting
//! and login/logout link.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Session;

/// Viewer identity and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl SessionState {
    #[must_use]
    pub fn logged_in(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.logged_in)
    }

    /// The signed-in user's id.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().filter(|s| s.logged_in).map(|s| s.id.as_str())
    }

    /// The signed-in user's nickname.
    #[must_use]
    pub fn nickname(&self) -> Option<&str> {
        self.session.as_ref().filter(|s| s.logged_in).map(|s| s.nickname.as_str())
    }

    #[must_use]
    pub fn greeting(&self) -> String {
        match self.nickname() {
            Some(nickname) => format!("Hello, {nickname}!"),
            None => "Hello, Stranger!".to_owned(),
        }
    }

    #[must_use]
    pub fn toggle_link_label(&self) -> &'static str {
        if self.logged_in() { "Log out" } else { "Log in" }
    }

    #[must_use]
    pub fn toggle_link_url(&self) -> &str {
        self.session.as_ref().map_or("", |s| s.toggle_login_url.as_str())
    }

    /// Placeholder for the comment text box.
    #[must_use]
    pub fn comment_placeholder(&self) -> &'static str {
        if self.logged_in() { "Leave a comment..." } else { "Log in to leave a comment" }
    }

    pub fn set_nickname(&mut self, nickname: &str) {
        if let Some(session) = self.session.as_mut() {
            nickname.clone_into(&mut session.nickname);
        }
    }
}
