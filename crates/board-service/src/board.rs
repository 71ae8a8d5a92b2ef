//! Board facade
//!
//! The single entry point a presentation layer uses: it validates request
//! DTOs, resolves identities, dispatches to the services and maps the results
//! to response DTOs.

use std::sync::Arc;

use board_common::auth::CredentialPolicy;
use board_common::config::AppConfig;
use board_core::traits::DocumentStore;
use board_core::{Credentials, Identity, PostId, SnowflakeGenerator};
use board_db::{create_store, SharedDocument};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    rejection, AddCommentRequest, CreatePostRequest, FeedResponse, IdentityResponse,
    LoginRequest, PostResponse, RegisterRequest,
};
use crate::services::{
    AuthGate, CommentService, PostService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SessionService, UserService,
};

const MAX_WORKER_ID: u16 = 1023;

#[derive(Debug, Clone)]
pub struct Board {
    ctx: ServiceContext,
}

impl Board {
    /// Open the board described by `config`
    ///
    /// # Errors
    /// Returns an error if the storage backend cannot be built or the worker
    /// id is out of range
    pub async fn open(config: &AppConfig) -> ServiceResult<Self> {
        let store = create_store(&config.storage)?;
        Self::open_with_store(config, store).await
    }

    /// Open with an explicit store, taking everything else from `config`
    ///
    /// # Errors
    /// Returns an error if the worker id is out of range
    pub async fn open_with_store(
        config: &AppConfig,
        store: Arc<dyn DocumentStore>,
    ) -> ServiceResult<Self> {
        let worker_id = config.snowflake.worker_id;
        if worker_id > MAX_WORKER_ID {
            return Err(ServiceError::validation(format!(
                "worker id {worker_id} exceeds {MAX_WORKER_ID}"
            )));
        }

        let document = Arc::new(SharedDocument::open(store).await);
        let generator = SnowflakeGenerator::new(worker_id);
        if let Some(latest) = document.snapshot().latest_snowflake() {
            generator.observe(latest);
        }

        let ctx = ServiceContextBuilder::new()
            .document(document)
            .credential_policy(CredentialPolicy::new(config.auth.credential_mode))
            .snowflake_generator(Arc::new(generator))
            .build()?;

        info!(
            app = %config.app.name,
            backend = ctx.document().backend(),
            credential_mode = config.auth.credential_mode.as_str(),
            worker_id,
            "Board opened"
        );
        Ok(Self { ctx })
    }

    pub fn from_context(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    /// Resolve the credentials a request carried
    pub fn resolve(&self, credentials: Option<&Credentials>) -> Identity {
        AuthGate::new(&self.ctx).resolve(credentials)
    }

    /// Every post, oldest first, for an authenticated viewer
    #[instrument(skip_all, fields(viewer = identity.name()))]
    pub fn feed(&self, identity: &Identity) -> ServiceResult<FeedResponse> {
        let viewer = identity.require()?.to_string();
        let posts = PostService::new(&self.ctx)
            .list_posts()
            .iter()
            .map(PostResponse::from)
            .collect();

        Ok(FeedResponse { viewer, posts })
    }

    /// A single post, for an authenticated viewer
    pub fn post(&self, identity: &Identity, post_id: &str) -> ServiceResult<PostResponse> {
        identity.require()?;
        PostService::new(&self.ctx)
            .get_post(&PostId::new(post_id))
            .map(PostResponse::from)
    }

    pub async fn create_post(
        &self,
        identity: &Identity,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        identity.require()?;
        request.validate().map_err(|e| rejection(&e))?;

        PostService::new(&self.ctx)
            .create_post(identity, &request.text)
            .await
            .map(PostResponse::from)
    }

    /// Comment on a post; returns the post with its updated thread
    pub async fn add_comment(
        &self,
        identity: &Identity,
        request: AddCommentRequest,
    ) -> ServiceResult<PostResponse> {
        identity.require()?;
        request.validate().map_err(|e| rejection(&e))?;

        CommentService::new(&self.ctx)
            .add_comment(identity, &PostId::new(request.post_id), &request.text)
            .await
            .map(PostResponse::from)
    }

    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<IdentityResponse> {
        request.validate().map_err(|e| rejection(&e))?;

        UserService::new(&self.ctx)
            .register(&request.name, &request.password)
            .await
            .map(IdentityResponse::from)
    }

    /// Sign in. Length caps are not applied here, only on registration.
    pub fn authenticate(&self, request: LoginRequest) -> ServiceResult<IdentityResponse> {
        UserService::new(&self.ctx)
            .authenticate(&request.name, &request.password)
            .map(IdentityResponse::from)
    }

    pub fn logout(&self, identity: &Identity) -> IdentityResponse {
        IdentityResponse::from(SessionService::new(&self.ctx).logout(identity))
    }
}
