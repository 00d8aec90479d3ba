pub mod categories;
pub mod posts;
pub mod sitemap;
pub mod slugs;
