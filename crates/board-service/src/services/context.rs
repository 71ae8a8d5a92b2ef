//! Service context - dependency container for services
//!
//! Holds the shared document, the credential policy and the id generator.

use std::sync::Arc;

use board_common::auth::CredentialPolicy;
use board_core::{PostId, SnowflakeGenerator};
use board_db::SharedDocument;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    document: Arc<SharedDocument>,
    credential_policy: CredentialPolicy,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    pub fn new(
        document: Arc<SharedDocument>,
        credential_policy: CredentialPolicy,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            document,
            credential_policy,
            snowflake_generator,
        }
    }

    /// Get the serialized document handle
    pub fn document(&self) -> &SharedDocument {
        self.document.as_ref()
    }

    pub fn credential_policy(&self) -> &CredentialPolicy {
        &self.credential_policy
    }

    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a fresh post id
    pub fn generate_post_id(&self) -> PostId {
        PostId::from(self.snowflake_generator.generate())
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("document", &self.document)
            .field("credential_mode", &self.credential_policy.mode())
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    document: Option<Arc<SharedDocument>>,
    credential_policy: Option<CredentialPolicy>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(mut self, document: Arc<SharedDocument>) -> Self {
        self.document = Some(document);
        self
    }

    /// Defaults to the hashed policy when not set
    pub fn credential_policy(mut self, policy: CredentialPolicy) -> Self {
        self.credential_policy = Some(policy);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.document
                .ok_or_else(|| ServiceError::validation("document is required"))?,
            self.credential_policy.unwrap_or_default(),
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
