use super::PostQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    /// Look a post up by its public slug. Reading a published post counts as
    /// one view.
    pub async fn get_post_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetPostBySlugQuery,
    ) -> ApplicationResult<PostDto> {
        // A malformed slug can never be stored, so it is simply not found.
        let slug = Slug::new(query.slug).map_err(|_| ApplicationError::not_found("post not found"))?;
        let found = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|p| p.post.is_visible_to(actor.map(|a| &a.id)))
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if found.post.is_published() {
            if let Err(err) = self.write_repo.record_view(found.post.id).await {
                tracing::warn!(post_id = %found.post.id, error = %err, "failed to record view");
            }
        }

        Ok(found.into())
    }
}
