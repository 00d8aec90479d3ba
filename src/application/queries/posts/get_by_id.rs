use super::PostQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};
use uuid::Uuid;

pub struct GetPostByIdQuery {
    pub id: Uuid,
}

impl PostQueryService {
    pub async fn get_post_by_id(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetPostByIdQuery,
    ) -> ApplicationResult<PostDto> {
        let found = self
            .read_repo
            .find_by_id(PostId(query.id))
            .await?
            .filter(|p| p.post.is_visible_to(actor.map(|a| &a.id)))
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        Ok(found.into())
    }
}
