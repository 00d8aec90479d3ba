// src/application/services/mod.rs
use std::{sync::Arc, time::Duration};

use crate::{
    application::{
        commands::{
            categories::CategoryCommandService, posts::PostCommandService,
            uploads::ImageUploadService,
        },
        dto::AuthenticatedUser,
        error::ApplicationResult,
        ports::{ClockPort, IdentityVerifierPort, ObjectStoragePort, SlugGeneratorPort},
        preview::{self, SlugPreviewer},
        queries::{
            categories::CategoryQueryService, posts::PostQueryService,
            sitemap::SitemapQueryService, slugs::SlugQueryService,
        },
    },
    domain::{
        category::CategoryRepository,
        post::{PostReadRepository, PostWriteRepository},
        slug::{EntityKind, SlugExistence, SlugService},
    },
};

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Tunables handed down from configuration.
#[derive(Debug, Clone, Copy)]
pub struct ServiceSettings {
    pub max_upload_bytes: usize,
    pub preview_debounce: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            preview_debounce: preview::DEFAULT_DEBOUNCE,
        }
    }
}

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub slug_queries: Arc<SlugQueryService>,
    pub uploads: Arc<ImageUploadService>,
    pub sitemap: Arc<SitemapQueryService>,
    slug_service: Arc<SlugService>,
    identity_verifier: Arc<IdentityVerifierPort>,
    settings: ServiceSettings,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        slug_registry: Arc<dyn SlugExistence>,
        slugger: Arc<SlugGeneratorPort>,
        identity_verifier: Arc<IdentityVerifierPort>,
        object_storage: Arc<ObjectStoragePort>,
        clock: Arc<ClockPort>,
        settings: ServiceSettings,
    ) -> Self {
        let slug_service = Arc::new(SlugService::new(slugger, slug_registry));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&post_write_repo),
        ));
        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(
            Arc::clone(&category_repo),
            Arc::clone(&post_read_repo),
        ));
        let slug_queries = Arc::new(SlugQueryService::new(Arc::clone(&slug_service)));
        let uploads = Arc::new(ImageUploadService::new(
            object_storage,
            Arc::clone(&clock),
            settings.max_upload_bytes,
        ));
        let sitemap = Arc::new(SitemapQueryService::new(post_read_repo, category_repo, clock));

        Self {
            post_commands,
            post_queries,
            category_commands,
            category_queries,
            slug_queries,
            uploads,
            sitemap,
            slug_service,
            identity_verifier,
            settings,
        }
    }

    pub fn identity_verifier(&self) -> Arc<IdentityVerifierPort> {
        Arc::clone(&self.identity_verifier)
    }

    /// Verify a raw bearer token against the identity provider.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.identity_verifier.verify(token).await
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.settings.max_upload_bytes
    }

    /// A previewer for `kind` using the configured debounce window.
    pub fn slug_previewer(&self, kind: EntityKind) -> SlugPreviewer {
        SlugPreviewer::new(Arc::clone(&self.slug_service), kind)
            .debounce(self.settings.preview_debounce)
    }
}
