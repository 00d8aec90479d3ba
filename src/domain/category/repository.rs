use crate::domain::category::entity::{Category, CategoryWithCount, NewCategory};
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugStamp};
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    /// Newest first, each with the number of published posts filed under it.
    async fn list_with_post_counts(&self) -> DomainResult<Vec<CategoryWithCount>>;
    async fn list_slugs(&self) -> DomainResult<Vec<SlugStamp>>;
}
