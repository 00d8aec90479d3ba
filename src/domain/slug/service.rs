// src/domain/slug/service.rs
use std::sync::Arc;

use super::{
    error::SlugError,
    kind::{EntityId, EntityKind},
    resolver::{SlugExistence, resolve_unique, suggest_alternative},
    value::{Slug, validate},
};
use crate::domain::errors::DomainResult;

const SUGGESTION_ATTEMPTS: u32 = 20;

/// Turns free text into a slug candidate.
pub trait SlugGenerator: Send + Sync {
    fn generate(&self, input: &str) -> Result<Slug, SlugError>;
}

/// Outcome of an availability check made on behalf of the authoring form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugAvailability {
    pub slug: String,
    pub valid: bool,
    pub available: bool,
    pub suggestion: Option<Slug>,
}

/// Domain service responsible for producing unique slugs for posts and
/// categories.
pub struct SlugService {
    generator: Arc<dyn SlugGenerator>,
    existence: Arc<dyn SlugExistence>,
}

impl SlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>, existence: Arc<dyn SlugExistence>) -> Self {
        Self {
            generator,
            existence,
        }
    }

    pub fn generate(&self, source: &str) -> Result<Slug, SlugError> {
        self.generator.generate(source)
    }

    /// Slug for an entity about to be created: the supplied slug when present
    /// (must validate), otherwise one generated from `source`.
    pub async fn slug_for_new(
        &self,
        kind: EntityKind,
        source: &str,
        supplied: Option<&str>,
    ) -> DomainResult<Slug> {
        let candidate = match supplied.filter(|value| !value.is_empty()) {
            Some(value) => Slug::new(value)?,
            None => self.generator.generate(source)?,
        };
        resolve_unique(candidate, kind, None, self.existence.as_ref()).await
    }

    /// Re-validate a slug submitted while editing `id`; the entity's own row
    /// never counts as a collision.
    pub async fn slug_for_update(
        &self,
        kind: EntityKind,
        id: EntityId,
        supplied: &str,
    ) -> DomainResult<Slug> {
        let candidate = Slug::new(supplied)?;
        resolve_unique(candidate, kind, Some(id), self.existence.as_ref()).await
    }

    pub async fn check_availability(
        &self,
        kind: EntityKind,
        candidate: &str,
        exclude: Option<EntityId>,
    ) -> DomainResult<SlugAvailability> {
        if !validate(candidate) {
            return Ok(SlugAvailability {
                slug: candidate.to_owned(),
                valid: false,
                available: false,
                suggestion: None,
            });
        }

        let slug = Slug::new(candidate)?;
        let taken = self.existence.slug_exists(&slug, kind, exclude).await?;
        let suggestion = if taken {
            suggest_alternative(
                &slug,
                kind,
                exclude,
                self.existence.as_ref(),
                SUGGESTION_ATTEMPTS,
            )
            .await?
        } else {
            None
        };

        Ok(SlugAvailability {
            slug: slug.into_inner(),
            valid: true,
            available: !taken,
            suggestion,
        })
    }
}
