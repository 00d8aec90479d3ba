// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::ClockPort,
    },
    domain::{
        category::{CategoryId, CategoryRepository},
        post::{PostReadRepository, PostWriteRepository},
        slug::SlugService,
    },
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) clock: Arc<ClockPort>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slug_service,
            clock,
        }
    }

    /// Map the client's category field to an existing category (or none).
    pub(super) async fn resolve_category(
        &self,
        raw: Option<&str>,
    ) -> ApplicationResult<Option<CategoryId>> {
        let Some(id) = raw.map(CategoryId::parse_optional).transpose()?.flatten() else {
            return Ok(None);
        };

        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        Ok(Some(id))
    }
}
