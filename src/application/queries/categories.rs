// src/application/queries/categories.rs
use crate::{
    application::{
        dto::{CategoryPostsDto, CategoryWithCountDto, PaginationDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategoryRepository,
        post::PostReadRepository,
        slug::Slug,
    },
};
use std::sync::Arc;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 50;

pub struct ListCategoryPostsQuery {
    pub slug: String,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

pub struct CategoryQueryService {
    category_repo: Arc<dyn CategoryRepository>,
    post_repo: Arc<dyn PostReadRepository>,
}

impl CategoryQueryService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        post_repo: Arc<dyn PostReadRepository>,
    ) -> Self {
        Self {
            category_repo,
            post_repo,
        }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryWithCountDto>> {
        let categories = self.category_repo.list_with_post_counts().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn list_category_posts(
        &self,
        query: ListCategoryPostsQuery,
    ) -> ApplicationResult<CategoryPostsDto> {
        let page = query.page.filter(|p| *p > 0).unwrap_or(1);
        let limit = match query.limit {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(n) => n.min(MAX_PAGE_SIZE),
        };

        let slug =
            Slug::new(query.slug).map_err(|_| ApplicationError::not_found("category not found"))?;
        let category = self
            .category_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let offset = u64::from(page - 1) * u64::from(limit);
        let (posts, total) = self
            .post_repo
            .list_by_category(category.id, offset, limit)
            .await?;

        Ok(CategoryPostsDto {
            category: category.into(),
            posts: posts.into_iter().map(Into::into).collect(),
            pagination: PaginationDto::new(page, limit, total),
        })
    }
}
