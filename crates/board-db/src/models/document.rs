//! Document model

use serde::{Deserialize, Deserializer, Serialize};

/// Root of the persisted JSON document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentModel {
    #[serde(default)]
    pub users: Vec<UserModel>,
    #[serde(default)]
    pub posts: Vec<PostModel>,
}

/// Persisted user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserModel {
    pub name: String,
    /// Cleartext secret or Argon2 PHC string
    pub password: String,
}

/// Persisted post record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostModel {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub author: String,
    pub text: String,
    #[serde(default)]
    pub comments: Vec<CommentModel>,
}

/// Persisted comment record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentModel {
    pub author: String,
    pub text: String,
}

/// Hand-edited documents sometimes carry numeric timestamp ids; keep them as
/// their decimal text.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
