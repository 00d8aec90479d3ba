use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, PostUpdate, PostWithCategory};
use crate::domain::post::value_objects::PostId;
use crate::domain::slug::{Slug, SlugStamp};
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<PostWithCategory>;
    async fn update(&self, update: PostUpdate) -> DomainResult<PostWithCategory>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
    async fn record_view(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<PostWithCategory>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<PostWithCategory>>;
    /// Published posts, newest first.
    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<PostWithCategory>>;
    /// One page of the published posts of a category, plus the total count.
    async fn list_by_category(
        &self,
        category_id: CategoryId,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<PostWithCategory>, u64)>;
    async fn list_published_slugs(&self) -> DomainResult<Vec<SlugStamp>>;
}
