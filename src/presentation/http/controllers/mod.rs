// src/presentation/http/controllers/mod.rs
pub mod categories;
pub mod posts;
pub mod sitemap;
pub mod slugs;
pub mod uploads;
