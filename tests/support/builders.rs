// tests/support/builders.rs
use blog_core::domain::category::{Category, CategoryId, CategoryName};
use blog_core::domain::post::{AuthorId, Post, PostContent, PostId, PostStatus, PostTitle};
use blog_core::domain::slug::Slug;
use uuid::Uuid;

use super::mocks::{TEST_USER, fixed_now};

pub struct PostBuilder {
    id: Uuid,
    title: String,
    slug: String,
    author: String,
    status: PostStatus,
    category_id: Option<Uuid>,
}

impl PostBuilder {
    pub fn new(slug: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: format!("Post {slug}"),
            slug: slug.into(),
            author: TEST_USER.into(),
            status: PostStatus::Published,
            category_id: None,
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = author.into();
        self
    }

    pub fn draft(mut self) -> Self {
        self.status = PostStatus::Draft;
        self
    }

    pub fn category(mut self, id: Uuid) -> Self {
        self.category_id = Some(id);
        self
    }

    pub fn build(self) -> Post {
        Post {
            id: PostId(self.id),
            title: PostTitle::new(self.title).unwrap(),
            slug: Slug::new(self.slug).unwrap(),
            content: PostContent::new("본문").unwrap(),
            cover_image_url: None,
            category_id: self.category_id.map(CategoryId),
            author_id: AuthorId::new(self.author).unwrap(),
            status: self.status,
            view_count: 0,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}

pub fn category(name: &str, slug: &str) -> Category {
    Category {
        id: CategoryId(Uuid::new_v4()),
        name: CategoryName::new(name).unwrap(),
        slug: Slug::new(slug).unwrap(),
        description: None,
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}
