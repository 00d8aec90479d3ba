use std::sync::Arc;

use crate::domain::post::{PostReadRepository, PostWriteRepository};

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
}

impl PostQueryService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        write_repo: Arc<dyn PostWriteRepository>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
        }
    }
}
