//! Document entity <-> model mapper

use board_core::entities::{Comment, Document, Post, User};
use board_core::value_objects::PostId;

use crate::models::{CommentModel, DocumentModel, PostModel, UserModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User::new(model.name, model.password)
    }
}

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment::new(model.author, model.text)
    }
}

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: PostId::new(model.id),
            author: model.author,
            text: model.text,
            comments: model.comments.into_iter().map(Comment::from).collect(),
        }
    }
}

impl From<DocumentModel> for Document {
    fn from(model: DocumentModel) -> Self {
        Document {
            users: model.users.into_iter().map(User::from).collect(),
            posts: model.posts.into_iter().map(Post::from).collect(),
        }
    }
}

impl From<&User> for UserModel {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            password: user.password.clone(),
        }
    }
}

impl From<&Comment> for CommentModel {
    fn from(comment: &Comment) -> Self {
        Self {
            author: comment.author.clone(),
            text: comment.text.clone(),
        }
    }
}

impl From<&Post> for PostModel {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.as_str().to_string(),
            author: post.author.clone(),
            text: post.text.clone(),
            comments: post.comments.iter().map(CommentModel::from).collect(),
        }
    }
}

impl From<&Document> for DocumentModel {
    fn from(doc: &Document) -> Self {
        Self {
            users: doc.users.iter().map(UserModel::from).collect(),
            posts: doc.posts.iter().map(PostModel::from).collect(),
        }
    }
}

/// Decode a persisted document.
///
/// A JSON `null` (an absent remote node) decodes as the empty document.
pub fn decode_document(bytes: &[u8]) -> Result<Document, serde_json::Error> {
    let model: Option<DocumentModel> = serde_json::from_slice(bytes)?;
    Ok(model.map(Document::from).unwrap_or_default())
}

/// Encode a document in the persisted layout; `pretty` uses two-space indentation
pub fn encode_document(doc: &Document, pretty: bool) -> Result<Vec<u8>, serde_json::Error> {
    let model = DocumentModel::from(doc);
    if pretty {
        serde_json::to_vec_pretty(&model)
    } else {
        serde_json::to_vec(&model)
    }
}
