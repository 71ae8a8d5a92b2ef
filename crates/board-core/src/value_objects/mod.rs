//! Value objects - immutable types that represent domain concepts

mod identity;
mod post_id;
mod snowflake;

pub use identity::{Credentials, Identity};
pub use post_id::PostId;
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
