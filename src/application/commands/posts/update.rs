use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        post::{
            CoverImageUrl, PostContent, PostId, PostStatus, PostTitle, PostUpdate,
            specifications::{CanModifyPostSpec, PostSpecification},
        },
        slug::{EntityId, EntityKind},
    },
};
use uuid::Uuid;

/// Partial update. Absent fields are kept; a blank `cover_image_url` clears
/// the image and a blank or `"none"` `category_id` detaches the category.
pub struct UpdatePostCommand {
    pub id: Uuid,
    pub title: Option<String>,
    pub content: Option<String>,
    pub slug: Option<String>,
    pub cover_image_url: Option<String>,
    pub category_id: Option<String>,
    pub status: Option<String>,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let id = PostId(command.id);
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !CanModifyPostSpec::new(&existing.post, &actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author may update this post",
            ));
        }

        let mut update = PostUpdate::new(id, self.clock.now());

        if let Some(title) = command.title {
            update = update.with_title(PostTitle::new(title)?);
        }
        if let Some(content) = command.content {
            update = update.with_content(PostContent::new(content)?);
        }
        if let Some(slug) = command.slug.filter(|s| !s.is_empty()) {
            let slug = self
                .slug_service
                .slug_for_update(EntityKind::Post, EntityId(id.into()), &slug)
                .await?;
            update = update.with_slug(slug);
        }
        if let Some(raw) = command.cover_image_url {
            update = update.with_cover_image_url(CoverImageUrl::optional(Some(raw))?);
        }
        if let Some(raw) = command.category_id {
            let category_id = self.resolve_category(Some(&raw)).await?;
            update = update.with_category(category_id);
        }
        if let Some(status) = command.status {
            update = update.with_status(status.parse::<PostStatus>()?);
        }

        if update.is_empty() {
            return Ok(existing.into());
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(post_id = %id, slug = %updated.post.slug, "post updated");
        Ok(updated.into())
    }
}
