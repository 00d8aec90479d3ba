// src/infrastructure/repositories/postgres_slug.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{EntityId, EntityKind, Slug, SlugExistence};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

const POST_SLUG_EXISTS: &str = "SELECT EXISTS (
    SELECT 1 FROM posts WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2)
)";

const CATEGORY_SLUG_EXISTS: &str = "SELECT EXISTS (
    SELECT 1 FROM categories WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2)
)";

/// Slug existence checks against the posts and categories tables.
#[derive(Clone)]
pub struct PostgresSlugRegistry {
    pool: PgPool,
}

impl PostgresSlugRegistry {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlugExistence for PostgresSlugRegistry {
    #[tracing::instrument(skip(self), fields(slug = %slug))]
    async fn slug_exists(
        &self,
        slug: &Slug,
        kind: EntityKind,
        exclude: Option<EntityId>,
    ) -> DomainResult<bool> {
        let sql = match kind {
            EntityKind::Post => POST_SLUG_EXISTS,
            EntityKind::Category => CATEGORY_SLUG_EXISTS,
        };

        sqlx::query_scalar::<_, bool>(sql)
            .bind(slug.as_str())
            .bind(exclude.map(Uuid::from))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
