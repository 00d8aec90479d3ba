// src/domain/post/entity.rs
use crate::domain::category::{CategoryId, CategorySummary};
use crate::domain::post::value_objects::{
    AuthorId, CoverImageUrl, PostContent, PostId, PostStatus, PostTitle,
};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: Slug,
    pub content: PostContent,
    pub cover_image_url: Option<CoverImageUrl>,
    pub category_id: Option<CategoryId>,
    pub author_id: AuthorId,
    pub status: PostStatus,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Drafts and archived posts are visible to their author only.
    pub fn is_visible_to(&self, viewer: Option<&AuthorId>) -> bool {
        self.is_published() || viewer == Some(&self.author_id)
    }
}

/// A post as read back from the store, joined with its category.
#[derive(Debug, Clone)]
pub struct PostWithCategory {
    pub post: Post,
    pub category: Option<CategorySummary>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: Slug,
    pub content: PostContent,
    pub cover_image_url: Option<CoverImageUrl>,
    pub category_id: Option<CategoryId>,
    pub author_id: AuthorId,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update. `None` leaves a column untouched; the nested options of
/// `cover_image_url` and `category_id` distinguish "clear" from "keep".
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub slug: Option<Slug>,
    pub content: Option<PostContent>,
    pub cover_image_url: Option<Option<CoverImageUrl>>,
    pub category_id: Option<Option<CategoryId>>,
    pub status: Option<PostStatus>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            cover_image_url: None,
            category_id: None,
            status: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_cover_image_url(mut self, url: Option<CoverImageUrl>) -> Self {
        self.cover_image_url = Some(url);
        self
    }

    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.content.is_none()
            && self.cover_image_url.is_none()
            && self.category_id.is_none()
            && self.status.is_none()
    }
}
