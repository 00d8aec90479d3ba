// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_post;
mod postgres_slug;
mod slug_stamp;

pub use error::map_sqlx;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
pub use postgres_slug::PostgresSlugRegistry;

pub(crate) use slug_stamp::SlugStampRow;
