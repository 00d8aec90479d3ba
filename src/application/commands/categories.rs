// src/application/commands/categories.rs
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::ApplicationResult,
        ports::ClockPort,
    },
    domain::{
        category::{CategoryDescription, CategoryName, CategoryRepository, NewCategory},
        slug::{EntityKind, SlugService},
    },
};
use std::sync::Arc;

pub struct CreateCategoryCommand {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
}

pub struct CategoryCommandService {
    repo: Arc<dyn CategoryRepository>,
    slug_service: Arc<SlugService>,
    clock: Arc<ClockPort>,
}

impl CategoryCommandService {
    pub fn new(
        repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            repo,
            slug_service,
            clock,
        }
    }

    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let description = CategoryDescription::optional(command.description);
        let slug = self
            .slug_service
            .slug_for_new(EntityKind::Category, name.as_str(), command.slug.as_deref())
            .await?;

        let now = self.clock.now();
        let created = self
            .repo
            .insert(NewCategory {
                name,
                slug,
                description,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(
            category_id = %created.id,
            slug = %created.slug,
            author = %actor.id,
            "category created"
        );
        Ok(created.into())
    }
}
