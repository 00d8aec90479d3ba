pub mod auth;
pub mod categories;
pub mod pagination;
pub mod posts;
pub mod serde_time;
pub mod sitemap;
pub mod slugs;
pub mod uploads;

pub use auth::AuthenticatedUser;
pub use categories::{CategoryDto, CategoryPostsDto, CategorySummaryDto, CategoryWithCountDto};
pub use pagination::PaginationDto;
pub use posts::PostDto;
pub use sitemap::{ChangeFrequency, SitemapEntryDto};
pub use slugs::{GeneratedSlugDto, SlugCheckDto};
pub use uploads::UploadedImageDto;
