use crate::domain::post::entity::Post;
use crate::domain::post::value_objects::AuthorId;

pub trait PostSpecification {
    fn is_satisfied(&self) -> bool;
}

/// Only the author may edit or delete a post.
pub struct CanModifyPostSpec<'a> {
    post: &'a Post,
    actor: &'a AuthorId,
}

impl<'a> CanModifyPostSpec<'a> {
    pub fn new(post: &'a Post, actor: &'a AuthorId) -> Self {
        Self { post, actor }
    }
}

impl PostSpecification for CanModifyPostSpec<'_> {
    fn is_satisfied(&self) -> bool {
        &self.post.author_id == self.actor
    }
}
