//! Post and comment entities

use crate::value_objects::PostId;

/// Comment attached to a post. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Author name copied at creation time, not a live reference
    pub author: String,
    pub text: String,
}

impl Comment {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }
}

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    /// Author name copied at creation time, not a live reference
    pub author: String,
    pub text: String,
    /// Append-only, in insertion order
    pub comments: Vec<Comment>,
}

impl Post {
    /// Create a new Post with no comments
    pub fn new(id: PostId, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            text: text.into(),
            comments: Vec::new(),
        }
    }

    /// Append a comment to the end of the thread
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    #[inline]
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Get a truncated preview of the post text (for log lines and notifications)
    pub fn preview(&self, max_len: usize) -> &str {
        if self.text.len() <= max_len {
            &self.text
        } else {
            let mut end = max_len;
            while !self.text.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.text[..end]
        }
    }
}
