// src/infrastructure/repositories/postgres_post.rs
use super::{SlugStampRow, map_sqlx};
use crate::domain::category::{CategoryId, CategoryName, CategorySummary};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    AuthorId, CoverImageUrl, NewPost, Post, PostContent, PostId, PostReadRepository, PostStatus,
    PostTitle, PostUpdate, PostWithCategory, PostWriteRepository,
};
use crate::domain::slug::{Slug, SlugStamp};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

/// Post columns joined with the summary of their category. Used as the tail
/// of every query returning posts; expects the posts relation aliased `p`.
const POST_SELECT: &str = "SELECT p.id, p.title, p.slug, p.content, p.cover_image_url, \
     p.category_id, p.author_id, p.status, p.view_count, p.created_at, p.updated_at, \
     c.name AS category_name, c.slug AS category_slug";

const POST_COLUMNS: &str = "id, title, slug, content, cover_image_url, category_id, author_id, \
     status, view_count, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    slug: String,
    content: String,
    cover_image_url: Option<String>,
    category_id: Option<Uuid>,
    author_id: String,
    status: String,
    view_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    category_name: Option<String>,
    category_slug: Option<String>,
}

impl TryFrom<PostRow> for PostWithCategory {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        let category = match (row.category_id, row.category_name, row.category_slug) {
            (Some(id), Some(name), Some(slug)) => Some(CategorySummary {
                id: CategoryId(id),
                name: CategoryName::new(name)?,
                slug: Slug::new(slug)?,
            }),
            _ => None,
        };

        Ok(PostWithCategory {
            post: Post {
                id: PostId(row.id),
                title: PostTitle::new(row.title)?,
                slug: Slug::new(row.slug)?,
                content: PostContent::new(row.content)?,
                cover_image_url: CoverImageUrl::optional(row.cover_image_url)?,
                category_id: row.category_id.map(CategoryId),
                author_id: AuthorId::new(row.author_id)?,
                status: row.status.parse::<PostStatus>()?,
                view_count: row.view_count,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            category,
        })
    }
}

fn into_posts(rows: Vec<PostRow>) -> DomainResult<Vec<PostWithCategory>> {
    rows.into_iter().map(PostWithCategory::try_from).collect()
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<PostWithCategory> {
        let NewPost {
            title,
            slug,
            content,
            cover_image_url,
            category_id,
            author_id,
            status,
            created_at,
            updated_at,
        } = post;

        let sql = format!(
            "WITH p AS (
                INSERT INTO posts (title, slug, content, cover_image_url, category_id, author_id, status, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING {POST_COLUMNS}
             )
             {POST_SELECT} FROM p LEFT JOIN categories c ON c.id = p.category_id"
        );

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(content.as_str())
            .bind(cover_image_url.as_ref().map(CoverImageUrl::as_str))
            .bind(category_id.map(Uuid::from))
            .bind(author_id.as_str())
            .bind(status.as_str())
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        PostWithCategory::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<PostWithCategory> {
        let PostUpdate {
            id,
            title,
            slug,
            content,
            cover_image_url,
            category_id,
            status,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("WITH p AS (UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }

        if let Some(cover) = cover_image_url {
            builder.push(", cover_image_url = ");
            builder.push_bind(cover.map(CoverImageUrl::into_inner));
        }

        if let Some(category) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(category.map(Uuid::from));
        }

        if let Some(status) = status {
            builder.push(", status = ");
            builder.push_bind(status.as_str());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(Uuid::from(id));
        builder.push(" RETURNING ");
        builder.push(POST_COLUMNS);
        builder.push(") ");
        builder.push(POST_SELECT);
        builder.push(" FROM p LEFT JOIN categories c ON c.id = p.category_id");

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        PostWithCategory::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }

    async fn record_view(&self, id: PostId) -> DomainResult<()> {
        sqlx::query("UPDATE posts SET view_count = view_count + 1 WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<PostWithCategory>> {
        let sql = format!(
            "{POST_SELECT} FROM posts p LEFT JOIN categories c ON c.id = p.category_id WHERE p.id = $1"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(PostWithCategory::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<PostWithCategory>> {
        let sql = format!(
            "{POST_SELECT} FROM posts p LEFT JOIN categories c ON c.id = p.category_id WHERE p.slug = $1"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(PostWithCategory::try_from).transpose()
    }

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<PostWithCategory>> {
        let sql = format!(
            "{POST_SELECT} FROM posts p LEFT JOIN categories c ON c.id = p.category_id
             WHERE p.status = 'published'
             ORDER BY p.created_at DESC, p.id DESC
             LIMIT $1"
        );
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        into_posts(rows)
    }

    async fn list_by_category(
        &self,
        category_id: CategoryId,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<PostWithCategory>, u64)> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM posts WHERE category_id = $1 AND status = 'published'",
        )
        .bind(Uuid::from(category_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let offset = i64::try_from(offset)
            .map_err(|_| DomainError::Validation("page offset out of range".into()))?;
        let sql = format!(
            "{POST_SELECT} FROM posts p LEFT JOIN categories c ON c.id = p.category_id
             WHERE p.category_id = $1 AND p.status = 'published'
             ORDER BY p.created_at DESC, p.id DESC
             LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(Uuid::from(category_id))
            .bind(i64::from(limit))
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok((into_posts(rows)?, u64::try_from(total).unwrap_or_default()))
    }

    async fn list_published_slugs(&self) -> DomainResult<Vec<SlugStamp>> {
        let rows = sqlx::query_as::<_, SlugStampRow>(
            "SELECT slug, updated_at FROM posts WHERE status = 'published' ORDER BY updated_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(SlugStamp::try_from).collect()
    }
}
