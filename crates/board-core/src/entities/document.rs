//! Document aggregate - the whole persisted board state

use crate::error::DomainError;
use crate::value_objects::{PostId, Snowflake};

use super::post::{Comment, Post};
use super::user::User;

/// Root aggregate holding every user and post.
///
/// Users are unique by name; posts are kept in creation order. Nothing in this
/// type removes or reorders entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
}

impl Document {
    /// Empty document, the state assumed when nothing has been persisted yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a user by exact name
    pub fn find_user(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.is_named(name))
    }

    /// Check if a user name is already taken
    pub fn has_user(&self, name: &str) -> bool {
        self.find_user(name).is_some()
    }

    /// Append a user, enforcing name uniqueness
    pub fn insert_user(&mut self, user: User) -> Result<(), DomainError> {
        if self.has_user(&user.name) {
            return Err(DomainError::DuplicateUser(user.name));
        }
        self.users.push(user);
        Ok(())
    }

    /// Find a post by id. Legacy documents may hold duplicate ids; the first
    /// post in creation order wins.
    pub fn find_post(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| &p.id == id)
    }

    fn find_post_mut(&mut self, id: &PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| &p.id == id)
    }

    /// Append a post to the end of the feed
    pub fn push_post(&mut self, post: Post) {
        self.posts.push(post);
    }

    /// Largest post id that reads as a Snowflake
    pub fn latest_snowflake(&self) -> Option<Snowflake> {
        self.posts.iter().filter_map(|p| p.id.snowflake()).max()
    }

    /// Append a comment to an existing post and return the updated post
    pub fn append_comment(&mut self, id: &PostId, comment: Comment) -> Result<&Post, DomainError> {
        let post = self
            .find_post_mut(id)
            .ok_or_else(|| DomainError::PostNotFound(id.clone()))?;
        post.push_comment(comment);
        Ok(post)
    }

    /// Total number of comments across all posts
    pub fn comment_count(&self) -> usize {
        self.posts.iter().map(Post::comment_count).sum()
    }
}
