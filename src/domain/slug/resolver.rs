use super::{
    error::SlugError,
    kind::{EntityId, EntityKind},
    value::Slug,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Existence check against the store that owns the slugs.
#[async_trait]
pub trait SlugExistence: Send + Sync {
    /// Whether an entity of `kind`, other than `exclude`, already holds `slug`.
    async fn slug_exists(
        &self,
        slug: &Slug,
        kind: EntityKind,
        exclude: Option<EntityId>,
    ) -> DomainResult<bool>;
}

/// Accept `candidate` if nobody else in `kind` holds it.
///
/// Issues exactly one existence query and never disambiguates on its own: a
/// collision is reported as [`SlugError::Taken`].
pub async fn resolve_unique(
    candidate: Slug,
    kind: EntityKind,
    exclude: Option<EntityId>,
    existence: &dyn SlugExistence,
) -> DomainResult<Slug> {
    if existence.slug_exists(&candidate, kind, exclude).await? {
        return Err(SlugError::Taken { kind }.into());
    }
    Ok(candidate)
}

/// First free `base-N` for `N` in `1..=max_attempts`, if any.
pub async fn suggest_alternative(
    base: &Slug,
    kind: EntityKind,
    exclude: Option<EntityId>,
    existence: &dyn SlugExistence,
    max_attempts: u32,
) -> DomainResult<Option<Slug>> {
    for n in 1..=max_attempts {
        let candidate = base.with_suffix(n);
        if !existence.slug_exists(&candidate, kind, exclude).await? {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}
