// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
    },
    domain::{
        post::{CoverImageUrl, NewPost, PostContent, PostStatus, PostTitle},
        slug::EntityKind,
    },
};

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub slug: Option<String>,
    pub cover_image_url: Option<String>,
    pub category_id: Option<String>,
    pub status: Option<String>,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    slug: Option<String>,
    cover_image_url: Option<String>,
    category_id: Option<String>,
    status: Option<String>,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn cover_image_url(mut self, url: impl Into<String>) -> Self {
        self.cover_image_url = Some(url.into());
        self
    }

    pub fn category_id(mut self, id: impl Into<String>) -> Self {
        self.category_id = Some(id.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            slug: self.slug,
            cover_image_url: self.cover_image_url,
            category_id: self.category_id,
            status: self.status,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let cover_image_url = CoverImageUrl::optional(command.cover_image_url)?;
        let status = command
            .status
            .as_deref()
            .map(str::parse::<PostStatus>)
            .transpose()?
            .unwrap_or_default();
        let category_id = self.resolve_category(command.category_id.as_deref()).await?;

        let slug = self
            .slug_service
            .slug_for_new(EntityKind::Post, title.as_str(), command.slug.as_deref())
            .await?;

        let now = self.clock.now();
        let new_post = NewPost {
            title,
            slug,
            content,
            cover_image_url,
            category_id,
            author_id: actor.id.clone(),
            status,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_post).await?;
        tracing::info!(
            post_id = %created.post.id,
            slug = %created.post.slug,
            author = %actor.id,
            "post created"
        );
        Ok(created.into())
    }
}
