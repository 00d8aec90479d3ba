// src/application/queries/sitemap.rs
use crate::{
    application::{
        dto::{ChangeFrequency, SitemapEntryDto},
        error::ApplicationResult,
        ports::ClockPort,
    },
    domain::{category::CategoryRepository, post::PostReadRepository},
};
use std::sync::Arc;

pub struct SitemapQueryService {
    post_repo: Arc<dyn PostReadRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    clock: Arc<ClockPort>,
}

impl SitemapQueryService {
    pub fn new(
        post_repo: Arc<dyn PostReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            post_repo,
            category_repo,
            clock,
        }
    }

    /// Static pages, then published posts, then categories.
    ///
    /// A failing listing degrades to an empty section instead of failing the
    /// whole sitemap.
    pub async fn sitemap_entries(&self, base_url: &str) -> ApplicationResult<Vec<SitemapEntryDto>> {
        let base = base_url.trim_end_matches('/');
        let now = self.clock.now();

        let mut entries = vec![
            SitemapEntryDto {
                loc: format!("{base}/"),
                last_modified: now,
                change_frequency: ChangeFrequency::Daily,
                priority: 1.0,
            },
            SitemapEntryDto {
                loc: format!("{base}/posts"),
                last_modified: now,
                change_frequency: ChangeFrequency::Daily,
                priority: 0.9,
            },
            SitemapEntryDto {
                loc: format!("{base}/categories"),
                last_modified: now,
                change_frequency: ChangeFrequency::Weekly,
                priority: 0.7,
            },
        ];

        let posts = self.post_repo.list_published_slugs().await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "sitemap: listing posts failed");
            Vec::new()
        });
        entries.extend(posts.into_iter().map(|stamp| SitemapEntryDto {
            loc: format!("{base}/posts/{}", stamp.slug),
            last_modified: stamp.updated_at,
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.8,
        }));

        let categories = self.category_repo.list_slugs().await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "sitemap: listing categories failed");
            Vec::new()
        });
        entries.extend(categories.into_iter().map(|stamp| SitemapEntryDto {
            loc: format!("{base}/categories/{}", stamp.slug),
            last_modified: stamp.updated_at,
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.6,
        }));

        Ok(entries)
    }
}
