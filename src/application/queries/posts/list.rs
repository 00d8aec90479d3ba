use super::PostQueryService;
use crate::application::{dto::PostDto, error::ApplicationResult};

pub const DEFAULT_RECENT_LIMIT: u32 = 10;
pub const MAX_RECENT_LIMIT: u32 = 50;

pub struct ListRecentPostsQuery {
    pub limit: Option<u32>,
}

impl PostQueryService {
    pub async fn list_recent_posts(
        &self,
        query: ListRecentPostsQuery,
    ) -> ApplicationResult<Vec<PostDto>> {
        let limit = match query.limit {
            None | Some(0) => DEFAULT_RECENT_LIMIT,
            Some(n) => n.min(MAX_RECENT_LIMIT),
        };
        let posts = self.read_repo.list_recent(limit).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }
}
