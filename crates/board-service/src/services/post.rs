//! Post service
//!
//! Handles post creation and feed reads.

use board_core::entities::Post;
use board_core::{DomainError, Identity, PostId};
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::non_empty;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post authored by the caller
    #[instrument(skip(self, text), fields(author = identity.name()))]
    pub async fn create_post(&self, identity: &Identity, text: &str) -> ServiceResult<Post> {
        let author = identity.require()?;
        let text = non_empty(text).ok_or(DomainError::EmptyContent)?;

        let created = self
            .ctx
            .document()
            .transact(|doc| {
                let mut id = self.ctx.generate_post_id();
                while doc.find_post(&id).is_some() {
                    warn!(post_id = %id, "Generated post id already taken, drawing another");
                    id = self.ctx.generate_post_id();
                }

                let post = Post::new(id, author, text);
                doc.push_post(post.clone());
                Ok::<_, ServiceError>(post)
            })
            .await?;

        info!(post_id = %created.id, preview = created.preview(40), "Post created");
        Ok(created)
    }

    /// All posts in creation order
    pub fn list_posts(&self) -> Vec<Post> {
        self.ctx.document().snapshot().posts.clone()
    }

    /// Get a single post by id
    pub fn get_post(&self, id: &PostId) -> ServiceResult<Post> {
        self.ctx
            .document()
            .snapshot()
            .find_post(id)
            .cloned()
            .ok_or_else(|| DomainError::PostNotFound(id.clone()).into())
    }
}
