// src/presentation/http/controllers/sitemap.rs
use crate::application::dto::SitemapEntryDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, http::header, response::IntoResponse};
use chrono::SecondsFormat;
use std::fmt::Write;

#[utoipa::path(
    get,
    path = "/sitemap.xml",
    responses(
        (status = 200, description = "XML sitemap of the public site.", content_type = "application/xml", body = String)
    ),
    tag = "System"
)]
pub async fn sitemap(Extension(state): Extension<HttpState>) -> HttpResult<impl IntoResponse> {
    let entries = state
        .services
        .sitemap
        .sitemap_entries(&state.site_url)
        .await
        .into_http()?;

    Ok((
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render(&entries),
    ))
}

fn render(entries: &[SitemapEntryDto]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
             <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape(&entry.loc),
            entry
                .last_modified
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            entry.change_frequency.as_str(),
            entry.priority,
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ChangeFrequency;
    use chrono::{TimeZone, Utc};

    #[test]
    fn renders_entries_with_escaped_locations() {
        let entries = [SitemapEntryDto {
            loc: "https://blog.example.com/posts/a&b".into(),
            last_modified: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.8,
        }];
        let xml = render(&entries);
        assert!(xml.contains("<loc>https://blog.example.com/posts/a&amp;b</loc>"));
        assert!(xml.contains("<lastmod>2024-01-01T00:00:00.000Z</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(xml.ends_with("</urlset>\n"));
    }
}
