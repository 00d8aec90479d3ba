// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{
        PostId,
        specifications::{CanModifyPostSpec, PostSpecification},
    },
};
use uuid::Uuid;

pub struct DeletePostCommand {
    pub id: Uuid,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let id = PostId(command.id);
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !CanModifyPostSpec::new(&existing.post, &actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author may delete this post",
            ));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(post_id = %id, "post deleted");
        Ok(())
    }
}
