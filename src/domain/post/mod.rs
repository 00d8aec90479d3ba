pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate, PostWithCategory};
pub use repository::{PostReadRepository, PostWriteRepository};
pub use value_objects::{AuthorId, CoverImageUrl, PostContent, PostId, PostStatus, PostTitle};
