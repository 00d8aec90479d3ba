use crate::domain::post::PostWithCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{categories::CategorySummaryDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub category: Option<CategorySummaryDto>,
    pub author_id: String,
    pub status: String,
    pub view_count: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<PostWithCategory> for PostDto {
    fn from(value: PostWithCategory) -> Self {
        let PostWithCategory { post, category } = value;
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            content: post.content.into_inner(),
            cover_image_url: post.cover_image_url.map(|url| url.into_inner()),
            category_id: post.category_id.map(Into::into),
            category: category.map(Into::into),
            author_id: post.author_id.into_inner(),
            status: post.status.as_str().to_owned(),
            view_count: post.view_count,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
