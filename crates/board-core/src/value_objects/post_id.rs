//! Post identifier
//!
//! Posts created by this crate carry a Snowflake rendered as a decimal string.
//! Documents written by older deployments carry millisecond timestamps in the
//! same field, so the id is kept as an opaque token rather than parsed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::snowflake::Snowflake;

/// Globally unique post token
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Wrap an existing token
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the token
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the owned token
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Interpret the token as a Snowflake, if it is one
    pub fn snowflake(&self) -> Option<Snowflake> {
        Snowflake::parse(&self.0).ok()
    }
}

impl From<Snowflake> for PostId {
    fn from(id: Snowflake) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PostId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
