//! Comment service

use board_core::entities::{Comment, Post};
use board_core::{DomainError, Identity, PostId};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::non_empty;

pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Append a comment by the caller and return the updated post.
    ///
    /// Checked in order: identity, content, post existence.
    #[instrument(skip(self, text), fields(author = identity.name(), post_id = %post_id))]
    pub async fn add_comment(
        &self,
        identity: &Identity,
        post_id: &PostId,
        text: &str,
    ) -> ServiceResult<Post> {
        let author = identity.require()?;
        let text = non_empty(text).ok_or(DomainError::EmptyContent)?;
        let comment = Comment::new(author, text);

        let post = self
            .ctx
            .document()
            .transact(|doc| {
                doc.append_comment(post_id, comment)
                    .cloned()
                    .map_err(ServiceError::from)
            })
            .await?;

        info!(comments = post.comment_count(), "Comment added");
        Ok(post)
    }
}
