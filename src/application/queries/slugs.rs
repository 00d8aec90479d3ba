// src/application/queries/slugs.rs
use crate::{
    application::{
        dto::{GeneratedSlugDto, SlugCheckDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::{EntityId, EntityKind, SlugError, SlugService},
};
use std::sync::Arc;
use uuid::Uuid;

pub struct CheckSlugQuery {
    pub kind: String,
    pub slug: String,
    pub exclude_id: Option<Uuid>,
}

/// Slug helpers backing the authoring form: preview generation and
/// availability checks.
pub struct SlugQueryService {
    slug_service: Arc<SlugService>,
}

impl SlugQueryService {
    pub fn new(slug_service: Arc<SlugService>) -> Self {
        Self { slug_service }
    }

    pub fn generate_slug(&self, title: &str) -> ApplicationResult<GeneratedSlugDto> {
        let slug = self.slug_service.generate(title)?;
        Ok(GeneratedSlugDto {
            slug: slug.into_inner(),
        })
    }

    pub async fn check_slug(&self, query: CheckSlugQuery) -> ApplicationResult<SlugCheckDto> {
        // The kind arrives from the query string, so a bad value is the
        // client's mistake rather than a broken invariant.
        let kind: EntityKind = query
            .kind
            .parse()
            .map_err(|err: SlugError| ApplicationError::validation(err.to_string()))?;

        let availability = self
            .slug_service
            .check_availability(kind, &query.slug, query.exclude_id.map(EntityId))
            .await?;
        Ok(SlugCheckDto::new(kind, availability))
    }
}
