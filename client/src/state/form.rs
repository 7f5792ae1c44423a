//! Comment form contents and client-side validation.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a comment before submitting.")]
    EmptyText,
    #[error("Please log in before leaving a comment.")]
    SignedOut,
}

/// What the viewer has typed into the comment form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentForm {
    pub text: String,
    pub author: String,
    /// Becomes the created marker's `visible` flag.
    pub share_location: bool,
}

impl Default for CommentForm {
    fn default() -> Self {
        Self { text: String::new(), author: String::new(), share_location: true }
    }
}

/// A validated submission with whitespace trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentDraft {
    pub text: String,
    pub author: String,
    pub share_location: bool,
}

impl CommentForm {
    /// Reject blank text. A blank author falls back to `fallback_author`.
    pub fn validate(&self, fallback_author: &str) -> Result<CommentDraft, ValidationError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        let author = match self.author.trim() {
            "" => fallback_author,
            author => author,
        };
        Ok(CommentDraft { text: text.to_owned(), author: author.to_owned(), share_location: self.share_location })
    }

    /// Clear the text and reset the author to `nickname`.
    pub fn reset(&mut self, nickname: &str) {
        self.text.clear();
        nickname.clone_into(&mut self.author);
        self.share_location = true;
    }
}
